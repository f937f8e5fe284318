//! Collection settings persistence.
//!
//! Stores settings in the platform-specific config directory:
//! - Linux/macOS: ~/.config/rijks/settings.json
//! - Windows: %APPDATA%/rijks/settings.json

use std::path::{Path, PathBuf};

use rijks_domain::CollectionSettings;
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for collection settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository backed by the default settings file.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a repository backed by the file at `path`.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings file location, if a config dir exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rijks").join("settings.json"))
    }

    /// Returns the path this repository reads and writes.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<CollectionSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(CollectionSettings::default());
        };

        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(CollectionSettings::default());
        }

        let content = fs::read(path).await?;
        let settings = from_json_bytes(&content)?;
        Ok(settings)
    }

    /// Saves settings to disk, creating the parent directory if needed.
    ///
    /// # Errors
    /// Returns an error if no path is known or the file cannot be written.
    pub async fn save(&self, settings: &CollectionSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(path, content).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_path_is_valid() {
        if let Some(p) = SettingsRepository::default_path() {
            assert!(p.ends_with("rijks/settings.json"));
        }
    }

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = SettingsRepository::with_path(dir.path().join("missing.json"));

        let settings = repo.load().await.expect("defaults");

        assert_eq!(settings, CollectionSettings::default());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = SettingsRepository::with_path(dir.path().join("nested").join("settings.json"));
        let settings = CollectionSettings {
            batch_size: 25,
            request_timeout_secs: 5,
            ..CollectionSettings::default()
        };

        repo.save(&settings).await.expect("save");
        let loaded = repo.load().await.expect("load");

        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").expect("write");

        let result = SettingsRepository::with_path(path).load().await;

        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }

    #[tokio::test]
    async fn save_without_path_fails() {
        let repo = SettingsRepository { path: None };
        let result = repo.save(&CollectionSettings::default()).await;
        assert!(matches!(result, Err(SettingsError::NoConfigDir)));
    }
}
