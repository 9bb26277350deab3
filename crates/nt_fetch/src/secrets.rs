use std::fmt;

use async_trait::async_trait;
use nt_core::{Error, Result, SecretProvider};

pub const DEFAULT_API_KEY_VAR: &str = "NEWS_API_KEY";

/// Reads the API key from an environment variable on every request, so a
/// key rotated in the environment is picked up without a restart.
#[derive(Debug, Clone)]
pub struct EnvSecretProvider {
    var: String,
}

impl EnvSecretProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR)
    }
}

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn credential(&self) -> Result<String> {
        match std::env::var(&self.var) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            Ok(_) => Err(Error::Credential(format!("{} is empty", self.var))),
            Err(_) => Err(Error::Credential(format!("{} is not set", self.var))),
        }
    }
}

#[derive(Clone)]
pub struct StaticSecretProvider {
    key: String,
}

impl StaticSecretProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl fmt::Debug for StaticSecretProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSecretProvider")
            .field("key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl SecretProvider for StaticSecretProvider {
    async fn credential(&self) -> Result<String> {
        Ok(self.key.clone())
    }
}
