// Human- and machine-readable codeplug summary

use super::error::{CodeplugError, Result};
use super::model::model_bytes_hex;
use super::{Codeplug, FORMAT_VERSION};
use crate::formats::FileMetadata;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Summary of a codeplug as shown by `anytone info`
#[derive(Debug, Clone, Serialize)]
pub struct CodeplugInfo {
    pub filename: String,
    pub filesize: usize,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_bytes: Option<String>,
    pub format_version: String,
    pub last_modified: Option<DateTime<Local>>,
    pub channels: usize,
    pub zones: usize,
    pub contacts: usize,
    pub radio_ids: Vec<u32>,
    /// Non-fatal problems hit while reading
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CodeplugInfo {
    /// Summarize @codeplug; a missing radio ID section only adds a warning
    pub fn new(codeplug: &Codeplug, file: &FileMetadata) -> Self {
        let data = codeplug.mmap().get_packed();
        let mut warnings = Vec::new();

        let radio_ids = match codeplug.radio_ids() {
            Ok(records) => records.iter().map(|r| r.value).collect(),
            Err(err @ CodeplugError::SectionNotFound) => {
                tracing::warn!("{}", err);
                warnings.push(err.to_string());
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("Failed to read radio IDs: {}", err);
                warnings.push(err.to_string());
                Vec::new()
            }
        };

        Self {
            filename: file.filename.clone(),
            filesize: codeplug.len(),
            model: codeplug.model().name().to_string(),
            model_bytes: model_bytes_hex(data),
            format_version: FORMAT_VERSION.to_string(),
            last_modified: file.last_modified,
            // Channel, zone and contact tables are not decoded
            channels: 0,
            zones: 0,
            contacts: 0,
            radio_ids,
            warnings,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CodeplugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Codeplug Information:")?;
        writeln!(f, "====================")?;
        writeln!(f, "Filename:       {}", self.filename)?;
        writeln!(f, "File size:      {} bytes", group_thousands(self.filesize))?;
        writeln!(f, "Radio model:    {}", self.model)?;
        if let Some(bytes) = &self.model_bytes {
            writeln!(
                f,
                "Model bytes:    0x{} (at address 0x00000009-0x00000010)",
                bytes
            )?;
        }
        writeln!(f, "Format version: {}", self.format_version)?;
        match &self.last_modified {
            Some(time) => writeln!(f, "Last modified:  {}", time.format("%Y-%m-%d %H:%M:%S"))?,
            None => writeln!(f, "Last modified:  unknown")?,
        }
        writeln!(f, "Channels:       {}", self.channels)?;
        writeln!(f, "Zones:          {}", self.zones)?;
        writeln!(f, "Contacts:       {}", self.contacts)?;
        writeln!(f, "Radio IDs:")?;
        for (i, id) in self.radio_ids.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, id)?;
        }
        Ok(())
    }
}

/// 1234567 -> "1,234,567"
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
