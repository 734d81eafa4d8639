// Fixed-width integer fields as stored in Anytone codeplugs
// Radio IDs are 24-bit unsigned little-endian values

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ElementError {
    #[error("Insufficient data: expected {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ElementError>;

/// Width of an encoded 24-bit field in bytes
pub const U24_WIDTH: usize = 3;

/// Largest value a 24-bit field can hold
pub const U24_MAX: u32 = 0x00FF_FFFF;

/// Read a u24 (3 bytes) in little-endian format
pub fn read_u24_le(data: &[u8]) -> Result<u32> {
    if data.len() < U24_WIDTH {
        return Err(ElementError::InsufficientData {
            expected: U24_WIDTH,
            actual: data.len(),
        });
    }
    Ok(u32::from_le_bytes([data[0], data[1], data[2], 0]))
}

/// Read a u24 little-endian field starting at @offset of @buffer
///
/// Callers are expected to have checked that `offset + 2 < buffer.len()`;
/// a short read is reported rather than panicking.
pub fn read_u24_le_at(buffer: &[u8], offset: usize) -> Result<u32> {
    read_u24_le(buffer.get(offset..).unwrap_or_default())
}

/// Write a u24 in little-endian format
///
/// Bits above the 24th are discarded; values must be range-checked first.
pub fn write_u24_le(value: u32) -> [u8; 3] {
    debug_assert!(value <= U24_MAX, "value {value:#x} does not fit in 24 bits");
    let bytes = value.to_le_bytes();
    [bytes[0], bytes[1], bytes[2]]
}
