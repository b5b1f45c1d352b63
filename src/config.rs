//! User settings
//!
//! Stored in ~/.config/playmix/config.json. Every field is optional in the
//! file; missing ones take their defaults. Command line flags take precedence
//! over anything read here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::playlist::Separator;

/// Persistent playlist settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sort directory entries before writing a fresh playlist
    pub sort_entries: bool,
    /// Separator used in written entries
    pub separator: Separator,
    /// Extension of playlist files created from directories
    pub extension: String,
    /// File stem of the merged playlist
    pub merged_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_entries: true,
            separator: Separator::Slash,
            extension: "m3u8".to_string(),
            merged_name: "distributed".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) => path,
                None => {
                    debug!("No config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let exists = fs::try_exists(&path).await.map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        if !exists {
            debug!("No config found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .await
            .map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;

        let settings = serde_json::from_str(&contents)
            .map_err(|source| Error::Config { path: path.clone(), source })?;

        debug!("Loaded config from {}", path.display());
        Ok(settings)
    }

    /// Default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("playmix").join("config.json"))
    }

    /// File name of the playlist created for `name`
    pub fn playlist_file(&self, name: &str) -> String {
        format!("{}.{}", name, self.extension)
    }

    /// File name of the merged playlist
    pub fn merged_file(&self) -> String {
        self.playlist_file(&self.merged_name)
    }
}
