//! Binary buffer utilities for tlvbox.
//!
//! All multi-byte quantities are little-endian, matching the TLV wire format.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`print_octets`] - Hex preview of a byte slice for diagnostics
//!
//! # Example
//!
//! ```
//! use tlvbox_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u32(0x0102_0304);
//! writer.u16(0x0506);
//! writer.utf8("hello");
//! let data = writer.flush();
//! assert_eq!(&data[..4], &[0x04, 0x03, 0x02, 0x01]);
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u32().unwrap(), 0x0102_0304);
//! assert_eq!(reader.u16().unwrap(), 0x0506);
//! assert_eq!(reader.buf(5).unwrap(), b"hello");
//! assert!(reader.u8().is_err());
//! ```

mod print_octets;
mod reader;
mod writer;

pub use print_octets::{print_octets, print_octets_default};
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
}
