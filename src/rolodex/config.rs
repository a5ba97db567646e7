use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::StorageError;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rolodex, stored in `{home}/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Contacts per page when listing the whole book
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Snapshot file name inside the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            data_file: default_data_file(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self, StorageError> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| StorageError::io(&config_path, e))?;
        let config: RolodexConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
