// Anytone codeplug (.rdt) access
//
// Only the radio ID table is decoded. Everything else in the image is carried
// through untouched.

pub mod error;
pub mod info;
pub mod model;
pub mod radio_id;
pub mod section;

pub use error::{CodeplugError, Result};
pub use info::CodeplugInfo;
pub use model::{Model, ModelInfo, KNOWN_MODELS};
pub use radio_id::{set_field, update_radio_id, validate_radio_id, MAX_RADIO_ID, MIN_RADIO_ID};
pub use section::{extract_fields, FieldRecord, FieldWalker, SectionLayout};

use crate::bitwise::SectionBounds;
use crate::memmap::MemoryMap;

/// Images shorter than this cannot be codeplugs
pub const MIN_CODEPLUG_SIZE: usize = 16;

/// Reported format version of the .rdt layout handled here
pub const FORMAT_VERSION: &str = "1.0";

/// A codeplug image
///
/// Radio IDs are addressed 1-based here, matching the numbering shown to
/// users; `set_field` and `FieldWalker` use 0-based indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codeplug {
    mmap: MemoryMap,
}

impl Codeplug {
    pub fn new(mmap: MemoryMap) -> Result<Self> {
        if mmap.len() < MIN_CODEPLUG_SIZE {
            return Err(CodeplugError::FileTooSmall { size: mmap.len() });
        }
        Ok(Self { mmap })
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::new(MemoryMap::new(data))
    }

    pub fn mmap(&self) -> &MemoryMap {
        &self.mmap
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn model(&self) -> Model {
        Model::detect(self.mmap.get_packed())
    }

    pub fn section_bounds(&self) -> Result<SectionBounds> {
        Ok(SectionLayout::ANYTONE_RADIO_IDS.locate(self.mmap.get_packed())?)
    }

    /// All non-empty radio IDs, with absolute offsets into the image
    pub fn radio_ids(&self) -> Result<Vec<FieldRecord>> {
        let bounds = self.section_bounds()?;
        Ok(SectionLayout::ANYTONE_RADIO_IDS.fields(self.mmap.get_packed(), bounds))
    }

    /// Radio ID number @number (1-based)
    pub fn radio_id(&self, number: usize) -> Result<FieldRecord> {
        let records = self.radio_ids()?;
        let count = records.len();
        number
            .checked_sub(1)
            .and_then(|index| records.get(index).copied())
            .ok_or(CodeplugError::IndexOutOfRange {
                index: number,
                count,
            })
    }

    /// Copy of this codeplug with radio ID @number (1-based) set to @value
    pub fn with_radio_id(&self, number: usize, value: u32) -> Result<Codeplug> {
        let mmap = update_radio_id(self.mmap.get_packed(), number, value)?;
        tracing::info!(number, value, "Updated radio ID");
        Ok(Self { mmap })
    }

    /// Hex dump of the radio ID section
    pub fn section_dump(&self) -> Result<String> {
        let bounds = self.section_bounds()?;
        if bounds.is_empty() {
            return Ok(String::new());
        }
        Ok(self.mmap.printable(bounds.start, bounds.end)?)
    }
}
