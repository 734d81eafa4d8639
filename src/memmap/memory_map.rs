// Owned byte image of a codeplug file

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MemoryMapError {
    #[error("Range {start}..{end} out of bounds for {size} byte image")]
    OutOfBounds {
        start: usize,
        end: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, MemoryMapError>;

/// Byte-for-byte image of a codeplug
///
/// Readers borrow slices out of it; writers produce a fresh copy so the
/// original image is never modified behind a caller's back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryMap {
    data: Vec<u8>,
}

impl MemoryMap {
    /// Create a new memory map from bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get @length bytes starting at @start
    pub fn get(&self, start: usize, length: usize) -> Result<&[u8]> {
        let end = start.saturating_add(length);
        self.data.get(start..end).ok_or(MemoryMapError::OutOfBounds {
            start,
            end,
            size: self.data.len(),
        })
    }

    /// Overwrite bytes starting at @pos; the image never grows
    pub fn set_bytes(&mut self, pos: usize, bytes: &[u8]) -> Result<()> {
        let end = pos.saturating_add(bytes.len());
        let size = self.data.len();
        let target = self
            .data
            .get_mut(pos..end)
            .ok_or(MemoryMapError::OutOfBounds {
                start: pos,
                end,
                size,
            })?;
        target.copy_from_slice(bytes);
        Ok(())
    }

    /// Get the entire memory map as raw bytes
    pub fn get_packed(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Hex dump of `start..end`, addressed by absolute offset
    pub fn printable(&self, start: usize, end: usize) -> Result<String> {
        let slice = self
            .data
            .get(start..end)
            .ok_or(MemoryMapError::OutOfBounds {
                start,
                end,
                size: self.data.len(),
            })?;
        Ok(hexdump(slice, start))
    }
}

impl From<Vec<u8>> for MemoryMap {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for MemoryMap {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl AsRef<[u8]> for MemoryMap {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for MemoryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryMap({} bytes)", self.data.len())
    }
}

/// Create a hex dump of bytes (similar to hexdump -C)
fn hexdump(data: &[u8], base: usize) -> String {
    let mut output = String::new();

    for (i, chunk) in data.chunks(16).enumerate() {
        output.push_str(&format!("{:08x}  ", base + i * 16));

        for j in 0..16 {
            if j == 8 {
                output.push(' ');
            }
            match chunk.get(j) {
                Some(byte) => output.push_str(&format!("{:02x} ", byte)),
                None => output.push_str("   "),
            }
        }

        output.push_str(" |");
        for &byte in chunk {
            if byte.is_ascii_graphic() || byte == b' ' {
                output.push(byte as char);
            } else {
                output.push('.');
            }
        }
        output.push_str("|\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_map_creation() {
        let mmap = MemoryMap::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(mmap.len(), 5);
        assert!(!mmap.is_empty());
        assert!(MemoryMap::from(&[][..]).is_empty());
        assert_eq!(mmap.to_string(), "MemoryMap(5 bytes)");
    }

    #[test]
    fn test_get_set() {
        let mut mmap = MemoryMap::new(vec![0; 10]);

        mmap.set_bytes(4, &[0x39, 0x30, 0x00]).unwrap();
        assert_eq!(mmap.get(4, 3).unwrap(), &[0x39, 0x30, 0x00]);
        assert_eq!(mmap.get(8, 2).unwrap(), &[0, 0]);
        assert_eq!(mmap.len(), 10);
    }

    #[test]
    fn test_bounds_checking() {
        let mut mmap = MemoryMap::new(vec![1, 2, 3]);

        assert!(mmap.get(5, 1).is_err());
        assert!(mmap.get(2, 5).is_err());
        assert_eq!(
            mmap.set_bytes(1, &[9, 9, 9]),
            Err(MemoryMapError::OutOfBounds {
                start: 1,
                end: 4,
                size: 3
            })
        );
        // Failed writes leave the image untouched
        assert_eq!(mmap.get_packed(), &[1, 2, 3]);
    }

    #[test]
    fn test_hexdump() {
        let data: Vec<u8> = (0u8..0x10).chain(*b"ABC").collect();
        let mmap = MemoryMap::new(data);
        let dump = mmap.printable(0, mmap.len()).unwrap();
        assert!(dump.starts_with("00000000  00 01 02 03"));
        assert!(dump.contains("00000010  41 42 43"));
        assert!(dump.contains("|ABC|"));

        let dump = mmap.printable(0x10, 0x13).unwrap();
        assert!(dump.starts_with("00000010  41 42 43"));
        assert!(mmap.printable(4, 100).is_err());
    }
}
