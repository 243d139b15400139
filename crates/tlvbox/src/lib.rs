//! Type-Length-Value container format.
//!
//! A [`TlvBox`] maps 32-bit tags to opaque payloads and encodes them as
//! back-to-back `[tag: u32 LE][length: u32 LE][payload]` records. Typed
//! accessors reinterpret payloads as little-endian integers, floats, UTF-8
//! text or nested containers. Repeated fields are stored on contiguous tag
//! ranges and read back with a gap-stop [`TagScan`].
//!
//! The [`record`] module layers the picture / face recognition record on top.
//!
//! Decoding treats input as untrusted: truncated records are errors, and
//! nesting depth and input size are bounded by [`DecodeLimits`].

mod constants;
mod error;
mod limits;
mod scan;
mod tlv_box;

pub mod record;

pub use constants::{HEADER_LEN, MAX_PAYLOAD_LEN};
pub use error::{Result, TlvError};
pub use limits::{DecodeLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN};
pub use scan::TagScan;
pub use tlv_box::TlvBox;
