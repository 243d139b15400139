//! TLV codec error type.

use thiserror::Error;

/// Error type for TLV decoding, typed access and record building.
///
/// An absent tag is never an error; accessors report it as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error("decode offset {offset} is past the end of a {len}-byte buffer")]
    OffsetOutOfRange { offset: usize, len: usize },
    #[error("input of {len} bytes exceeds the decode limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },
    #[error(
        "nested decode brings the bytes decoded along its chain to {total}, \
         over the limit of {limit}"
    )]
    AggregateTooLarge { total: usize, limit: usize },
    #[error("truncated record header at offset {offset}: {remaining} bytes left, 8 needed")]
    TruncatedHeader { offset: usize, remaining: usize },
    #[error(
        "truncated payload for tag 0x{tag:08x} at offset {offset}: \
         declared {declared} bytes, {remaining} remaining"
    )]
    TruncatedPayload {
        tag: u32,
        offset: usize,
        declared: u32,
        remaining: usize,
    },
    #[error("payload for tag 0x{tag:08x} is {actual} bytes, {expected} needed")]
    ShortPayload {
        tag: u32,
        expected: usize,
        actual: usize,
    },
    #[error("payload for tag 0x{tag:08x} is not valid UTF-8")]
    InvalidUtf8 { tag: u32 },
    #[error("payload for tag 0x{tag:08x} is {len} bytes, larger than a u32 length field")]
    PayloadTooLarge { tag: u32, len: usize },
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthExceeded { limit: u32 },
    #[error("tag range 0x{start:08x}..0x{end:08x} has no free tag left")]
    RangeExhausted { start: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, TlvError>;
