//! Tag dictionary of the picture / AI-detection record.
//!
//! These values are shared with existing producers and must stay bit-exact.

use std::ops::Range;

/// Picture data (bytes).
pub const PIC_DATA: u32 = 0x0000_0001;
/// Picture pixel format (string): jpeg, rgb, rgba, nv12.
pub const PIXEL_FMT: u32 = 0x0000_0002;
/// Picture capture time (string): `year-month-date hour:minute:second`.
pub const PIC_TIME: u32 = 0x0000_0003;
/// Playback URL (string).
pub const PLAY_URL: u32 = 0x0000_0004;
/// Alias of the playback URL (string).
pub const PLAY_ALIAS: u32 = 0x0000_0005;
/// Playback channel (i32).
pub const PLAY_CHANNEL: u32 = 0x0000_0006;

/// Recognised person name (string).
pub const PERSON_NAME: u32 = 0x0000_0010;
/// Recognised person id (string).
pub const PERSON_ID: u32 = 0x0000_0011;
/// Recognition match score (i32).
pub const PERSON_SCORE: u32 = 0x0000_0012;

/// Detected rectangles, one 16-byte `x, y, w, h` tuple per tag.
pub const RECT_RANGE: Range<u32> = 0x0000_1000..0x0000_2000;

/// Face recognition results, one nested record per tag.
pub const FACE_RECOG_RANGE: Range<u32> = 0x0000_2001..0x0000_3000;
