// Error type for codeplug reading and patching

use crate::bitwise::ScanError;
use crate::memmap::MemoryMapError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeplugError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File too small to be a valid codeplug ({size} bytes)")]
    FileTooSmall { size: usize },

    #[error("Could not locate radio ID section in codeplug")]
    SectionNotFound,

    #[error("Radio ID index {index} is out of range ({count} radio IDs present)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Invalid radio ID: {0}. Must be between 1 and 16777215")]
    InvalidValue(u32),

    #[error("Image error: {0}")]
    Memory(#[from] MemoryMapError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ScanError> for CodeplugError {
    fn from(err: ScanError) -> Self {
        tracing::debug!("Section scan failed: {}", err);
        CodeplugError::SectionNotFound
    }
}

pub type Result<T> = std::result::Result<T, CodeplugError>;
