// Radio model identification from codeplug header bytes

use std::fmt;

/// Short magic at the very start of the image
const SHORT_MAGIC_OFFSET: usize = 0;
const SHORT_MAGIC_LEN: usize = 4;

/// Long magic at 0x09..=0x10, present on D878UVII images
const LONG_MAGIC_OFFSET: usize = 0x09;
const LONG_MAGIC_LEN: usize = 8;

const D878UV_MAGIC: &[u8; 4] = b"D878";
const D578UV_MAGIC: &[u8; 4] = b"D578";
const D878UVII_MAGIC: &[u8; 8] = b"D878UVII";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    D878UV,
    D578UV,
    D878UVII,
    Unknown,
}

impl Model {
    /// Identify the radio model of a codeplug image
    ///
    /// The 8-byte magic at offset 9 wins over the 4-byte magic at offset 0.
    pub fn detect(data: &[u8]) -> Self {
        if long_magic(data) == Some(&D878UVII_MAGIC[..]) {
            return Model::D878UVII;
        }

        match data.get(SHORT_MAGIC_OFFSET..SHORT_MAGIC_OFFSET + SHORT_MAGIC_LEN) {
            Some(magic) if magic == D878UV_MAGIC => Model::D878UV,
            Some(magic) if magic == D578UV_MAGIC => Model::D578UV,
            _ => Model::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Model::D878UV => "Anytone AT-D878UV",
            Model::D578UV => "Anytone AT-D578UV",
            Model::D878UVII => "Anytone AT-D878UVII",
            Model::Unknown => "Unknown Anytone Model",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn long_magic(data: &[u8]) -> Option<&[u8]> {
    data.get(LONG_MAGIC_OFFSET..LONG_MAGIC_OFFSET + LONG_MAGIC_LEN)
}

/// Hex of the long magic bytes, reported only when they identify the model
pub fn model_bytes_hex(data: &[u8]) -> Option<String> {
    match Model::detect(data) {
        Model::D878UVII => long_magic(data)
            .map(|bytes| bytes.iter().map(|b| format!("{:02x}", b)).collect()),
        _ => None,
    }
}

/// Information about a supported radio model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub vendor: &'static str,
    pub model: &'static str,
    pub description: &'static str,
}

impl ModelInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.vendor, self.model)
    }
}

pub const KNOWN_MODELS: &[ModelInfo] = &[
    ModelInfo {
        vendor: "Anytone",
        model: "AT-D878UV",
        description: "Dual-band DMR/analog handheld (magic \"D878\" at 0x00)",
    },
    ModelInfo {
        vendor: "Anytone",
        model: "AT-D878UVII",
        description: "Dual-band DMR/analog handheld (magic \"D878UVII\" at 0x09)",
    },
    ModelInfo {
        vendor: "Anytone",
        model: "AT-D578UV",
        description: "Dual-band DMR/analog mobile (magic \"D578\" at 0x00)",
    },
];
