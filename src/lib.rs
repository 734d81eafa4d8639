// anytone-rs: read and patch Anytone radio codeplug files

pub mod bitwise;
pub mod codeplug;
pub mod formats;
pub mod memmap;

// Re-export commonly used types
pub use bitwise::{read_u24_le, write_u24_le, SectionBounds};
pub use codeplug::{
    extract_fields, set_field, Codeplug, CodeplugError, CodeplugInfo, FieldRecord, Model,
    SectionLayout,
};
pub use formats::{load_codeplug, save_codeplug, FileMetadata};
pub use memmap::MemoryMap;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
