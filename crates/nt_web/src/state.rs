use std::sync::Arc;
use nt_search::NewsManager;

pub struct AppState {
    pub manager: Arc<NewsManager>,
}

impl AppState {
    pub fn new(manager: Arc<NewsManager>) -> Self {
        Self { manager }
    }
}
