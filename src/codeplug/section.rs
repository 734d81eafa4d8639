// Radio ID section layout and field walker
//
// The radio ID table has no documented schema. It is found by its
// surrounding markers and walked with a delimiter heuristic: after a 2-byte
// header, each 24-bit field is followed somewhere by a 0x00 byte that sits
// two bytes before the next field. Which bytes a write touches depends on
// this walk, so it must stay exactly as is.

use crate::bitwise::{locate, read_u24_le_at, ScanError, SectionBounds, U24_WIDTH};
use serde::Serialize;

/// Marker preceding the radio ID table: "FO B", 28 zero bytes, 0x01
pub const RADIO_ID_SECTION_START: [u8; 33] = {
    let mut marker = [0u8; 33];
    marker[0] = b'F';
    marker[1] = b'O';
    marker[2] = b' ';
    marker[3] = b'B';
    marker[32] = 0x01;
    marker
};

/// Marker following the radio ID table
pub const RADIO_ID_SECTION_END: [u8; 11] = [
    0x00, 0x01, 0x00, 0x04, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03,
];

/// Describes how a marker-delimited field table is found and walked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub start_marker: &'static [u8],
    pub end_marker: &'static [u8],
    /// Bytes reserved before the first field
    pub header_skip: usize,
    /// Byte that precedes each following field by two positions
    pub delimiter: u8,
}

impl SectionLayout {
    pub const ANYTONE_RADIO_IDS: SectionLayout = SectionLayout {
        start_marker: &RADIO_ID_SECTION_START,
        end_marker: &RADIO_ID_SECTION_END,
        header_skip: 2,
        delimiter: 0x00,
    };

    /// Find this section's bounds in a whole codeplug image
    pub fn locate(&self, buffer: &[u8]) -> Result<SectionBounds, ScanError> {
        locate(buffer, self.start_marker, self.end_marker)
    }

    /// Walk the fields of already-extracted section bytes
    pub fn walk<'a>(&self, section: &'a [u8]) -> FieldWalker<'a> {
        FieldWalker {
            section,
            pos: self.header_skip,
            delimiter: self.delimiter,
            done: false,
        }
    }

    /// Decode every field of the section at @bounds, with absolute offsets
    pub fn fields(&self, buffer: &[u8], bounds: SectionBounds) -> Vec<FieldRecord> {
        self.walk(bounds.section(buffer))
            .map(|record| record.shifted(bounds.start))
            .collect()
    }
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self::ANYTONE_RADIO_IDS
    }
}

/// A decoded non-empty field and where its encoding begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    pub value: u32,
    pub offset: usize,
}

impl FieldRecord {
    /// Same record with its offset moved by @base
    pub fn shifted(self, base: usize) -> Self {
        Self {
            value: self.value,
            offset: base + self.offset,
        }
    }
}

/// Iterator over the non-zero fields of a section
///
/// Offsets are relative to the section slice. Zero values are empty slots and
/// are skipped. The walk ends when fewer than three bytes remain at the
/// cursor or when no further delimiter exists.
#[derive(Debug, Clone)]
pub struct FieldWalker<'a> {
    section: &'a [u8],
    pos: usize,
    delimiter: u8,
    done: bool,
}

impl Iterator for FieldWalker<'_> {
    type Item = FieldRecord;

    fn next(&mut self) -> Option<FieldRecord> {
        while !self.done && self.pos + 2 < self.section.len() {
            let pos = self.pos;
            let value = read_u24_le_at(self.section, pos).ok()?;

            let after_field = pos + U24_WIDTH;
            match self.section[after_field..]
                .iter()
                .position(|&b| b == self.delimiter)
            {
                // pos always advances by at least 5
                Some(skip) => self.pos = after_field + skip + 2,
                None => {
                    tracing::trace!(pos, "No delimiter after field, ending walk");
                    self.done = true;
                }
            }

            if value != 0 {
                return Some(FieldRecord { value, offset: pos });
            }
        }
        None
    }
}

/// Decode the radio ID fields out of section bytes (offsets relative)
pub fn extract_fields(section: &[u8]) -> Vec<FieldRecord> {
    SectionLayout::ANYTONE_RADIO_IDS.walk(section).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a section holding @ids, each as `<id:3> 00 <pad>` before the next
    fn section_with(ids: &[u32]) -> Vec<u8> {
        let mut section = vec![0xA5, 0x5A];
        for &id in ids {
            section.extend_from_slice(&crate::bitwise::write_u24_le(id));
            section.push(0x00);
            section.push(0x07);
        }
        section
    }

    #[test]
    fn test_markers() {
        assert_eq!(RADIO_ID_SECTION_START.len(), 33);
        assert_eq!(&RADIO_ID_SECTION_START[..4], &[0x46, 0x4F, 0x20, 0x42]);
        assert!(RADIO_ID_SECTION_START[4..32].iter().all(|&b| b == 0));
        assert_eq!(RADIO_ID_SECTION_START[32], 0x01);
        assert_eq!(RADIO_ID_SECTION_END.len(), 11);
    }

    #[test]
    fn test_adjacent_minimal_fields() {
        let section = [
            0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
        ];
        let fields = extract_fields(&section);
        assert_eq!(
            fields,
            vec![
                FieldRecord { value: 1, offset: 2 },
                FieldRecord { value: 1, offset: 7 },
            ]
        );
    }

    #[test]
    fn test_well_formed_fields_in_order() {
        let ids = [3_112_345, 1, 16_777_215, 2_000_000];
        let section = section_with(&ids);
        let fields = extract_fields(&section);

        assert_eq!(fields.len(), ids.len());
        let values: Vec<u32> = fields.iter().map(|f| f.value).collect();
        assert_eq!(values, ids);
        assert!(fields.windows(2).all(|w| w[0].offset < w[1].offset));
        assert_eq!(fields[0].offset, 2);
        assert_eq!(fields[1].offset, 7);
    }

    #[test]
    fn test_zero_slots_are_skipped() {
        let section = section_with(&[0, 42, 0, 0]);
        assert_eq!(extract_fields(&section), vec![FieldRecord { value: 42, offset: 7 }]);

        assert!(extract_fields(&section_with(&[0, 0, 0])).is_empty());
    }

    #[test]
    fn test_stops_at_missing_delimiter() {
        // Field at 2, then no 0x00 anywhere after it
        let section = [0x00, 0x00, 0x05, 0x01, 0x01, 0x09, 0x09, 0x39, 0x30, 0x01];
        let fields = extract_fields(&section);
        assert_eq!(fields, vec![FieldRecord { value: 0x010105, offset: 2 }]);
    }

    #[test]
    fn test_short_sections() {
        assert!(extract_fields(&[]).is_empty());
        assert!(extract_fields(&[0x00, 0x00]).is_empty());
        // pos + 2 == len: not enough room for a field
        assert!(extract_fields(&[0x00, 0x00, 0x01, 0x02]).is_empty());
        assert_eq!(
            extract_fields(&[0x00, 0x00, 0x01, 0x02, 0x03]),
            vec![FieldRecord { value: 0x030201, offset: 2 }]
        );
    }

    #[test]
    fn test_walk_is_restartable() {
        let section = section_with(&[10, 20, 30]);
        let layout = SectionLayout::default();
        let first: Vec<_> = layout.walk(&section).collect();
        let second: Vec<_> = layout.walk(&section).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fields_use_absolute_offsets() {
        let mut buffer = vec![0xEE; 5];
        buffer.extend_from_slice(&RADIO_ID_SECTION_START);
        let start = buffer.len();
        buffer.extend_from_slice(&section_with(&[7, 8]));
        buffer.extend_from_slice(&RADIO_ID_SECTION_END);

        let layout = SectionLayout::ANYTONE_RADIO_IDS;
        let bounds = layout.locate(&buffer).unwrap();
        assert_eq!(bounds.start, start);

        let fields = layout.fields(&buffer, bounds);
        assert_eq!(
            fields,
            vec![
                FieldRecord { value: 7, offset: start + 2 },
                FieldRecord { value: 8, offset: start + 7 },
            ]
        );
    }
}
