use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "STUDYBOOK_DIR";

/// Resolve the directory holding the stored collections.
///
/// A non-blank `STUDYBOOK_DIR` wins; otherwise the platform data directory
/// gets a `studybook` component (`~/.local/share/studybook` on Linux).
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let base =
        dirs::data_dir().context("could not determine the platform data directory")?;
    Ok(base.join("studybook"))
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_data_dir_override_and_fallback() {
        // Save original value
        let original = env::var(DATA_DIR_ENV).ok();

        // SAFETY: Setting environment variables in tests is safe as long as:
        // 1. No other test in this binary touches this variable
        // 2. No other threads are reading this variable concurrently
        // 3. We restore the original value afterwards
        unsafe {
            env::set_var(DATA_DIR_ENV, "/tmp/studybook-test");
        }
        assert_eq!(data_dir().unwrap(), PathBuf::from("/tmp/studybook-test"));

        // A blank override does not count as set.
        unsafe {
            env::set_var(DATA_DIR_ENV, "   ");
        }
        let fallback = data_dir().unwrap();
        assert!(fallback.ends_with("studybook"));

        unsafe {
            env::remove_var(DATA_DIR_ENV);
        }
        let fallback = data_dir().unwrap();
        assert!(fallback.ends_with("studybook"));

        // Restore original value
        if let Some(value) = original {
            unsafe {
                env::set_var(DATA_DIR_ENV, value);
            }
        }
    }
}
