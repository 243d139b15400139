/// Width of the tag field of a record header.
pub const TAG_LEN: usize = 4;

/// Width of the length field of a record header.
pub const LENGTH_LEN: usize = 4;

/// Record header: `[tag: u32 LE][length: u32 LE]`.
pub const HEADER_LEN: usize = TAG_LEN + LENGTH_LEN;

/// Largest payload the length field can describe.
pub const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;
