//! Run configuration from the environment.
//!
//! Settings come from the settings file first; these variables override it:
//! - `RIJKS_SETTINGS`: path of the settings file
//! - `RIJKS_COLLECTION_URL`: collection listing endpoint
//! - `RIJKS_BATCH_SIZE`: detail fetches per batch
//! - `RIJKS_PAGES`: batches to load after the first one

use rijks_domain::{CollectionSettings, Url};

/// Batches loaded after the initial one when `RIJKS_PAGES` is unset.
const DEFAULT_EXTRA_PAGES: usize = 1;

/// Errors from reading the environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds a value of the wrong form.
    #[error("{name} is invalid: {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// What a single run of the binary does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Client settings after overrides.
    pub settings: CollectionSettings,
    /// Batches to load after the initial one.
    pub extra_pages: usize,
}

/// Returns the settings file override, if any.
pub fn settings_path(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup("RIJKS_SETTINGS")
}

/// Applies environment overrides on top of `settings`.
///
/// # Errors
/// Returns [`ConfigError::Invalid`] if a variable cannot be parsed.
pub fn apply_env(
    mut settings: CollectionSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<RunConfig, ConfigError> {
    if let Some(value) = lookup("RIJKS_COLLECTION_URL") {
        settings.collection_url = Url::parse(&value).map_err(|e| ConfigError::Invalid {
            name: "RIJKS_COLLECTION_URL",
            reason: e.to_string(),
        })?;
    }

    if let Some(value) = lookup("RIJKS_BATCH_SIZE") {
        settings.batch_size = parse_count("RIJKS_BATCH_SIZE", &value)?;
    }

    let extra_pages = lookup("RIJKS_PAGES")
        .map(|value| parse_count("RIJKS_PAGES", &value))
        .transpose()?
        .unwrap_or(DEFAULT_EXTRA_PAGES);

    Ok(RunConfig {
        settings,
        extra_pages,
    })
}

fn parse_count(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        reason: format!("expected a non-negative integer, got {value:?}"),
    })
}
