pub mod config;
pub mod fixtures;
pub mod newsapi;
pub mod secrets;

pub use config::NewsApiConfig;
pub use fixtures::ExampleArticles;
pub use newsapi::NewsApiClient;
pub use secrets::{EnvSecretProvider, StaticSecretProvider};

pub mod prelude {
    pub use super::{
        EnvSecretProvider, ExampleArticles, NewsApiClient, NewsApiConfig, StaticSecretProvider,
    };
    pub use nt_core::{Article, Error, NewsSource, Result, SearchResult};
}
