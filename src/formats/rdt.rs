// Anytone .rdt codeplug files
// The file is the raw image; nothing is prepended or appended

use super::metadata::FileMetadata;
use crate::codeplug::{Codeplug, CodeplugError, Result};
use std::fs;
use std::path::Path;

/// Load a codeplug file and describe where it came from
pub fn load_codeplug(filename: impl AsRef<Path>) -> Result<(Codeplug, FileMetadata)> {
    let path = filename.as_ref();
    if !path.exists() {
        return Err(CodeplugError::FileNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;
    let metadata = FileMetadata::from_path(path)?;
    tracing::debug!("Read {} bytes from {}", data.len(), path.display());

    let codeplug = Codeplug::from_bytes(data)?;
    Ok((codeplug, metadata))
}

/// Write the full codeplug image to @filename
pub fn save_codeplug(filename: impl AsRef<Path>, codeplug: &Codeplug) -> Result<()> {
    let path = filename.as_ref();
    fs::write(path, codeplug.mmap().get_packed())?;
    tracing::debug!("Wrote {} bytes to {}", codeplug.len(), path.display());
    Ok(())
}
