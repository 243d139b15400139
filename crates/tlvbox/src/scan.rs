//! Gap-stop scans over contiguous tag ranges.
//!
//! The format has no native array type. A repeated field is written to
//! ascending tags `start, start + 1, ...` of a reserved range, and readers
//! walk that range until the first tag that is missing. Anything after the
//! gap is ignored, even if present: sparse repeats are not part of the format.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::tlv_box::TlvBox;

/// Iterator over the leading run of present tags in a range.
///
/// Yields `(tag, payload)` in ascending tag order and ends at the first absent
/// tag or at the end of the range, whichever comes first. Construct a new scan
/// to start over.
///
/// ```
/// use tlvbox::TlvBox;
///
/// let mut tlv = TlvBox::new();
/// tlv.put_u32(0x10, 1).put_u32(0x11, 2).put_u32(0x13, 4);
///
/// let tags: Vec<u32> = tlv.scan(0x10..0x20).map(|(tag, _)| tag).collect();
/// assert_eq!(tags, vec![0x10, 0x11]);
/// ```
#[derive(Debug, Clone)]
pub struct TagScan<'a> {
    tlv: &'a TlvBox,
    next: Option<u32>,
    end: u32,
}

impl<'a> TagScan<'a> {
    pub fn new(tlv: &'a TlvBox, range: Range<u32>) -> Self {
        Self {
            tlv,
            next: Some(range.start),
            end: range.end,
        }
    }
}

impl<'a> Iterator for TagScan<'a> {
    type Item = (u32, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.next.take()?;
        if tag >= self.end {
            return None;
        }
        let payload = self.tlv.get_bytes(tag)?;
        self.next = tag.checked_add(1);
        Some((tag, payload))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self
            .next
            .map_or(0, |tag| self.end.saturating_sub(tag) as usize);
        (0, Some(upper))
    }
}

impl FusedIterator for TagScan<'_> {}
