// Marker search over raw codeplug bytes using nom
// Sections in the .rdt format are anchored by fixed byte sequences

use nom::{bytes::complete::take_until, IResult};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("Section start marker not found")]
    StartMarkerMissing,

    #[error("Section end marker not found")]
    EndMarkerMissing,
}

/// Absolute byte range of a located section: `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: usize,
    pub end: usize,
}

impl SectionBounds {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the section, zero when the end marker precedes the start
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the section bytes out of @buffer
    ///
    /// Bounds that are inverted or run past the buffer yield an empty view.
    pub fn section<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        buffer.get(self.start..self.end).unwrap_or_default()
    }
}

/// Consume input up to the first occurrence of @marker
fn until_marker<'a>(marker: &'a [u8]) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], &'a [u8]> {
    take_until(marker)
}

/// Find the offset of the first occurrence of @marker in @buffer
pub fn find_marker(buffer: &[u8], marker: &[u8]) -> Option<usize> {
    if marker.is_empty() {
        return None;
    }
    until_marker(marker)(buffer)
        .ok()
        .map(|(_, skipped)| skipped.len())
}

/// Locate the bytes strictly between @start_marker and @end_marker
///
/// Both markers are searched independently from the start of the buffer and
/// only their presence is checked. An end marker that occurs before the start
/// marker still produces bounds; `SectionBounds::section` then returns an
/// empty view.
pub fn locate(
    buffer: &[u8],
    start_marker: &[u8],
    end_marker: &[u8],
) -> Result<SectionBounds, ScanError> {
    let start = find_marker(buffer, start_marker)
        .map(|pos| pos + start_marker.len())
        .ok_or(ScanError::StartMarkerMissing)?;
    let end = find_marker(buffer, end_marker).ok_or(ScanError::EndMarkerMissing)?;

    if end < start {
        tracing::debug!(start, end, "End marker precedes section start");
    }
    tracing::trace!(start, end, "Located section");

    Ok(SectionBounds { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_marker() {
        let data = b"hello\x00\xffmark\x00world";
        assert_eq!(find_marker(data, b"\x00\xffmark"), Some(5));
        assert_eq!(find_marker(data, b"hello"), Some(0));
        assert_eq!(find_marker(data, b"absent"), None);
        assert_eq!(find_marker(data, b""), None);
        assert_eq!(find_marker(b"", b"x"), None);
    }

    #[test]
    fn test_find_marker_first_occurrence() {
        let data = b"abXYabXY";
        assert_eq!(find_marker(data, b"XY"), Some(2));
    }

    #[test]
    fn test_locate() {
        let data = b"junk<<payload>>tail";
        let bounds = locate(data, b"<<", b">>").unwrap();
        assert_eq!(bounds, SectionBounds::new(6, 13));
        assert_eq!(bounds.section(data), b"payload");
        assert_eq!(bounds.len(), 7);
    }

    #[test]
    fn test_locate_start_marker_at_offset_zero() {
        let data = b"<<ab>>";
        let bounds = locate(data, b"<<", b">>").unwrap();
        assert_eq!(bounds.section(data), b"ab");
    }

    #[test]
    fn test_locate_missing_markers() {
        assert_eq!(
            locate(b"no start >>", b"<<", b">>"),
            Err(ScanError::StartMarkerMissing)
        );
        assert_eq!(
            locate(b"<< no end", b"<<", b">>"),
            Err(ScanError::EndMarkerMissing)
        );
        assert_eq!(locate(b"", b"<<", b">>"), Err(ScanError::StartMarkerMissing));
    }

    #[test]
    fn test_locate_inverted_markers() {
        // End marker first: presence is all that is checked
        let data = b">>xyz<<abc";
        let bounds = locate(data, b"<<", b">>").unwrap();
        assert_eq!(bounds, SectionBounds::new(7, 0));
        assert!(bounds.is_empty());
        assert!(bounds.section(data).is_empty());
    }
}
