// Radio ID updates
//
// Writes never change the image length: exactly three bytes are replaced in a
// copy of the caller's buffer, or an error is returned before anything is
// touched.

use super::error::{CodeplugError, Result};
use super::section::SectionLayout;
use crate::bitwise::{write_u24_le, SectionBounds, U24_MAX};
use crate::memmap::MemoryMap;

/// Smallest assignable radio ID; zero marks an empty slot
pub const MIN_RADIO_ID: u32 = 1;

/// Largest assignable radio ID
pub const MAX_RADIO_ID: u32 = U24_MAX;

/// Check that @value can be written as a radio ID
pub fn validate_radio_id(value: u32) -> Result<u32> {
    if (MIN_RADIO_ID..=MAX_RADIO_ID).contains(&value) {
        Ok(value)
    } else {
        Err(CodeplugError::InvalidValue(value))
    }
}

/// Replace the @index-th (0-based) non-empty field of the section at @bounds
///
/// The field is found by walking the section again, not from a cached list.
pub fn set_field(
    buffer: &[u8],
    bounds: SectionBounds,
    index: usize,
    new_value: u32,
) -> Result<MemoryMap> {
    let value = validate_radio_id(new_value)?;
    let layout = SectionLayout::ANYTONE_RADIO_IDS;
    let section = bounds.section(buffer);

    let record = layout
        .walk(section)
        .nth(index)
        .ok_or_else(|| CodeplugError::IndexOutOfRange {
            index,
            count: layout.walk(section).count(),
        })?;

    let offset = bounds.start + record.offset;
    let mut patched = MemoryMap::from(buffer);
    patched.set_bytes(offset, &write_u24_le(value))?;

    tracing::debug!(
        index,
        offset,
        old = record.value,
        new = value,
        "Patched radio ID field"
    );
    Ok(patched)
}

/// Replace radio ID number @number (1-based) in a whole codeplug image
pub fn update_radio_id(buffer: &[u8], number: usize, new_value: u32) -> Result<MemoryMap> {
    validate_radio_id(new_value)?;
    let bounds = SectionLayout::ANYTONE_RADIO_IDS.locate(buffer)?;

    let index = match number.checked_sub(1) {
        Some(index) => index,
        None => {
            let count = SectionLayout::ANYTONE_RADIO_IDS.fields(buffer, bounds).len();
            return Err(CodeplugError::IndexOutOfRange { index: number, count });
        }
    };

    set_field(buffer, bounds, index, new_value).map_err(|err| match err {
        CodeplugError::IndexOutOfRange { count, .. } => {
            CodeplugError::IndexOutOfRange { index: number, count }
        }
        other => other,
    })
}
