use std::sync::Arc;

use nt_core::{ArticleCache, Error, Result};

pub mod backends;

pub use backends::*;

/// Build the cache backend named by `kind`. Only `"memory"` exists; the cache
/// lives for the process lifetime and is never persisted.
pub fn create_cache(kind: &str) -> Result<Arc<dyn ArticleCache>> {
    match kind.to_ascii_lowercase().as_str() {
        "memory" => Ok(Arc::new(InMemoryCache::new())),
        other => Err(Error::Storage(format!("Unknown cache backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_cache;
}
