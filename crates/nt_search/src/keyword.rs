use nt_core::{Error, Result};

/// Keywords are non-empty and ASCII alphanumeric only. Runs before any I/O.
pub fn validate_keyword(keyword: &str) -> Result<()> {
    if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::invalid_keyword());
    }
    Ok(())
}
