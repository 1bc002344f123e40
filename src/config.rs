//! Configuration for the expense tracker.
//!
//! The only setting is the location of the expenses file. It defaults to `expenses.json` in the
//! current working directory and can be overridden with `--data-file` or `$EXPENSES_FILE`.

use crate::store::Store;
use crate::Result;
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};

/// The default name of the expenses file, relative to the working directory.
pub const DATA_FILE: &str = "expenses.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to the expenses file and it hands out a `Store` for that file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DATA_FILE)
    }
}

impl Config {
    /// Creates a `Config` without checking the filesystem.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// This will
    /// - validate that `data_file` is not a directory
    /// - validate that the directory that holds `data_file` exists
    /// - return the configuration object
    ///
    /// The expenses file itself does not need to exist yet; it is created on the first save.
    pub async fn load(data_file: impl Into<PathBuf>) -> Result<Self> {
        let data_file = data_file.into();
        if data_file.as_os_str().is_empty() {
            bail!("The expenses file path is empty")
        }

        if let Ok(metadata) = tokio::fs::metadata(&data_file).await {
            if metadata.is_dir() {
                bail!(
                    "The expenses file path '{}' is a directory",
                    data_file.display()
                )
            }
        }

        let parent = match data_file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let metadata = tokio::fs::metadata(&parent).await.with_context(|| {
            format!(
                "The directory for the expenses file is missing '{}'",
                parent.display()
            )
        })?;
        if !metadata.is_dir() {
            bail!("'{}' is not a directory", parent.display())
        }

        Ok(Self { data_file })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Creates a new `Store` for the expenses file.
    pub fn store(&self) -> Store {
        Store::new(&self.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file(), Path::new("expenses.json"));
        assert_eq!(config.store().path(), Path::new("expenses.json"));
    }

    #[tokio::test]
    async fn test_config_load_missing_file_is_ok() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("expenses.json");
        let config = Config::load(&path).await.unwrap();
        assert_eq!(config.data_file(), path);
    }

    #[tokio::test]
    async fn test_config_load_relative_name() {
        let config = Config::load(DATA_FILE).await.unwrap();
        assert_eq!(config.data_file(), Path::new(DATA_FILE));
    }

    #[tokio::test]
    async fn test_config_load_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("expenses.json");
        let result = Config::load(&path).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("The directory for the expenses file is missing"));
    }

    #[tokio::test]
    async fn test_config_load_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("is a directory"));
    }

    #[tokio::test]
    async fn test_config_load_empty_path() {
        assert!(Config::load("").await.is_err());
    }
}
