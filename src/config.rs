//! Settings for transaction tables, loaded from an optional JSON file.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Error, pagination::PageSize};

/// How transaction tables are laid out.
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// The rows shown per page before the user picks another page size.
    pub default_page_size: PageSize,
    /// The most page numbers shown in the page navigation bar.
    pub max_page_links: usize,
    /// The IANA timezone used to work out today's date.
    pub timezone: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::default(),
            max_page_links: 5,
            timezone: "Asia/Jakarta".to_owned(),
        }
    }
}

impl TableConfig {
    /// Parse a config from JSON.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if the JSON is malformed, has unknown
    /// fields or a page size that is not allowed.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|error| Error::InvalidConfig(error.to_string()))
    }

    /// Read a config from the JSON file at `path`.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|error| {
            Error::InvalidConfig(format!("could not read {}: {error}", path.display()))
        })?;

        let config = Self::from_json(&json)?;
        tracing::debug!("Loaded table config from {}: {config:?}", path.display());

        Ok(config)
    }
}
