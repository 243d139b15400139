use std::ops::Range;

use crate::error::{Result, TlvError};
use crate::record::rect::Rect;
use crate::record::tags;
use crate::tlv_box::TlvBox;

/// Writes picture records that [`RecordView`](crate::record::RecordView)
/// reads back.
///
/// Repeated fields are appended to the next free tag of their range, so the
/// output never contains the gaps that would truncate a reader's scan.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    tlv: TlvBox,
    next_rect: u32,
    next_recognition: u32,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            tlv: TlvBox::new(),
            next_rect: tags::RECT_RANGE.start,
            next_recognition: tags::FACE_RECOG_RANGE.start,
        }
    }

    pub fn pic_data(&mut self, data: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.tlv.put_bytes(tags::PIC_DATA, data)?;
        Ok(self)
    }

    pub fn pixel_format(&mut self, value: &str) -> Result<&mut Self> {
        self.tlv.put_str(tags::PIXEL_FMT, value)?;
        Ok(self)
    }

    pub fn pic_time(&mut self, value: &str) -> Result<&mut Self> {
        self.tlv.put_str(tags::PIC_TIME, value)?;
        Ok(self)
    }

    pub fn play_url(&mut self, value: &str) -> Result<&mut Self> {
        self.tlv.put_str(tags::PLAY_URL, value)?;
        Ok(self)
    }

    pub fn play_alias(&mut self, value: &str) -> Result<&mut Self> {
        self.tlv.put_str(tags::PLAY_ALIAS, value)?;
        Ok(self)
    }

    pub fn play_channel(&mut self, value: i32) -> &mut Self {
        self.tlv.put_i32(tags::PLAY_CHANNEL, value);
        self
    }

    pub fn person_name(&mut self, value: &str) -> Result<&mut Self> {
        self.tlv.put_str(tags::PERSON_NAME, value)?;
        Ok(self)
    }

    pub fn person_id(&mut self, value: &str) -> Result<&mut Self> {
        self.tlv.put_str(tags::PERSON_ID, value)?;
        Ok(self)
    }

    pub fn person_score(&mut self, value: i32) -> &mut Self {
        self.tlv.put_i32(tags::PERSON_SCORE, value);
        self
    }

    /// Appends a rectangle at the next free tag of [`tags::RECT_RANGE`].
    pub fn push_rect(&mut self, rect: Rect) -> Result<&mut Self> {
        let tag = claim(&mut self.next_rect, tags::RECT_RANGE)?;
        self.tlv.put_bytes(tag, rect.to_payload())?;
        Ok(self)
    }

    /// Appends a nested record at the next free tag of
    /// [`tags::FACE_RECOG_RANGE`].
    pub fn push_child(&mut self, child: &TlvBox) -> Result<&mut Self> {
        let tag = claim(&mut self.next_recognition, tags::FACE_RECOG_RANGE)?;
        self.tlv.put_box(tag, child)?;
        Ok(self)
    }

    pub fn build(self) -> TlvBox {
        self.tlv
    }

    pub fn encode(&self) -> Vec<u8> {
        self.tlv.encode()
    }
}

fn claim(next: &mut u32, range: Range<u32>) -> Result<u32> {
    let tag = *next;
    if tag >= range.end {
        return Err(TlvError::RangeExhausted {
            start: range.start,
            end: range.end,
        });
    }
    *next += 1;
    Ok(tag)
}
