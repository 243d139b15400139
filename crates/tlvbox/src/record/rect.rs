use serde::{Deserialize, Serialize};
use tlvbox_buffers::{BufferError, Reader, Writer};

use crate::error::{Result, TlvError};

/// Detection rectangle, stored as four little-endian `i32` at offsets 0, 4, 8
/// and 12 of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Encoded payload width.
    pub const LEN: usize = 16;

    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Reads a rectangle from the payload stored at `tag`.
    ///
    /// Bytes past the sixteenth are ignored.
    pub fn from_payload(tag: u32, payload: &[u8]) -> Result<Self> {
        let short = |_: BufferError| TlvError::ShortPayload {
            tag,
            expected: Self::LEN,
            actual: payload.len(),
        };
        let mut reader = Reader::new(payload);
        Ok(Self {
            x: reader.i32().map_err(short)?,
            y: reader.i32().map_err(short)?,
            w: reader.i32().map_err(short)?,
            h: reader.i32().map_err(short)?,
        })
    }

    pub fn to_payload(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(Self::LEN);
        writer.i32(self.x);
        writer.i32(self.y);
        writer.i32(self.w);
        writer.i32(self.h);
        writer.flush()
    }
}
