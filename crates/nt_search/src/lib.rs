pub mod filter;
pub mod grouping;
pub mod keyword;
pub mod manager;
pub mod mode;

pub use filter::filter_by_keyword;
pub use grouping::{group_at, group_by_interval};
pub use keyword::validate_keyword;
pub use manager::NewsManager;
pub use mode::ModeSwitch;

pub mod prelude {
    pub use super::{ModeSwitch, NewsManager};
    pub use nt_core::{Article, Error, GroupedArticles, Mode, Result, SearchResult, TimeUnit};
}
