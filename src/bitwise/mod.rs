// Low-level binary helpers for codeplug images
// Field codec and marker scanning; no knowledge of the section layout

pub mod elements;
pub mod scan;

pub use elements::{read_u24_le, read_u24_le_at, write_u24_le, ElementError, U24_MAX, U24_WIDTH};
pub use scan::{find_marker, locate, ScanError, SectionBounds};
