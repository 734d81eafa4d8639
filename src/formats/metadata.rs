// File-level facts about a loaded codeplug

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where a codeplug image came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Path as given by the user
    pub filename: String,

    /// Size on disk in bytes
    pub filesize: u64,

    /// Modification time, if the platform reports one
    #[serde(default)]
    pub last_modified: Option<DateTime<Local>>,
}

impl FileMetadata {
    /// Collect metadata for @path from the filesystem
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;
        let last_modified = meta.modified().ok().map(DateTime::<Local>::from);

        Ok(Self {
            filename: path.display().to_string(),
            filesize: meta.len(),
            last_modified,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
