//! TLV container: a tag → payload mapping with its binary codec.
//!
//! Wire layout, repeated until the input is exhausted:
//!
//! ```text
//! [tag: u32 LE][length: u32 LE][payload: length bytes]
//! ```
//!
//! There is no magic number, overall length prefix or checksum. The decoder
//! consumes records until the end of the slice it was given; anything short of
//! a whole record at the end is rejected.
//!
//! Duplicate tags on the wire are tolerated and the last one wins. Producers
//! should not emit them.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use tlvbox_buffers::{print_octets_default, BufferError, Reader, Writer};

use crate::constants::{HEADER_LEN, MAX_PAYLOAD_LEN};
use crate::error::{Result, TlvError};
use crate::limits::DecodeLimits;
use crate::scan::TagScan;

/// Type-Length-Value container.
///
/// Payloads are untyped bytes; the typed accessors reinterpret them on every
/// read. Reads never mutate the container, so a built container can be shared
/// across threads behind a shared reference.
///
/// # Example
///
/// ```
/// use tlvbox::TlvBox;
///
/// let mut tlv = TlvBox::new();
/// tlv.put_i32(0x06, 3).put_str(0x02, "jpeg").unwrap();
///
/// let bytes = tlv.encode();
/// let decoded = TlvBox::from_bytes(&bytes, 0).unwrap();
/// assert_eq!(decoded.get_i32(0x06).unwrap(), Some(3));
/// assert_eq!(decoded.get_str(0x02).unwrap(), Some("jpeg"));
/// assert_eq!(decoded.get_i32(0x07).unwrap(), None);
/// ```
#[derive(Clone, Default)]
pub struct TlvBox {
    entries: BTreeMap<u32, Vec<u8>>,
    limits: DecodeLimits,
    depth: u32,
    /// Bytes decoded into the containers enclosing this one.
    ancestry: usize,
    /// Bytes decoded into this container.
    decoded: usize,
}

macro_rules! fixed_width_accessors {
    ($($ty:ident => $get:ident, $put:ident;)*) => {
        $(
            #[doc = concat!("Reads the payload at `tag` as a little-endian `", stringify!($ty), "`.")]
            ///
            /// Returns `Ok(None)` when the tag is absent and
            /// [`TlvError::ShortPayload`] when the payload is narrower than the type.
            pub fn $get(&self, tag: u32) -> Result<Option<$ty>> {
                self.fixed(tag, std::mem::size_of::<$ty>(), |r| r.$ty())
            }

            #[doc = concat!("Stores `value` at `tag` as a little-endian `", stringify!($ty), "`.")]
            pub fn $put(&mut self, tag: u32, value: $ty) -> &mut Self {
                self.entries.insert(tag, value.to_le_bytes().to_vec());
                self
            }
        )*
    };
}

impl TlvBox {
    /// Creates an empty container with default [`DecodeLimits`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container that decodes under `limits`.
    pub fn with_limits(limits: DecodeLimits) -> Self {
        Self {
            entries: BTreeMap::new(),
            limits,
            depth: 0,
            ancestry: 0,
            decoded: 0,
        }
    }

    /// Decodes `buffer[offset..]` into a new container.
    pub fn from_bytes(buffer: &[u8], offset: usize) -> Result<Self> {
        Self::from_bytes_with_limits(buffer, offset, DecodeLimits::default())
    }

    pub fn from_bytes_with_limits(
        buffer: &[u8],
        offset: usize,
        limits: DecodeLimits,
    ) -> Result<Self> {
        let mut tlv = Self::with_limits(limits);
        tlv.decode(buffer, offset)?;
        Ok(tlv)
    }

    pub fn limits(&self) -> DecodeLimits {
        self.limits
    }

    /// Nesting level of this container; the outermost one is 0.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, tag: u32) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// `(tag, payload)` pairs in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u8])> + '_ {
        self.entries.iter().map(|(tag, payload)| (*tag, payload.as_slice()))
    }

    /// Gap-stop scan over `range`; see [`TagScan`].
    pub fn scan(&self, range: Range<u32>) -> TagScan<'_> {
        TagScan::new(self, range)
    }

    // ------------------------------------------------------------------ codec

    /// Decodes every record in `buffer[offset..]` into this container.
    ///
    /// Existing entries are kept; a decoded tag overwrites an existing one.
    /// The decode is all-or-nothing: on error the container is unchanged.
    ///
    /// For a nested container the bytes already decoded by every enclosing
    /// container count against `max_input_len` as well.
    pub fn decode(&mut self, buffer: &[u8], offset: usize) -> Result<()> {
        if offset > buffer.len() {
            return Err(TlvError::OffsetOutOfRange {
                offset,
                len: buffer.len(),
            });
        }
        let input = &buffer[offset..];
        if input.len() > self.limits.max_input_len {
            return Err(TlvError::InputTooLarge {
                len: input.len(),
                limit: self.limits.max_input_len,
            });
        }
        let total = self.ancestry.saturating_add(input.len());
        if total > self.limits.max_input_len {
            return Err(TlvError::AggregateTooLarge {
                total,
                limit: self.limits.max_input_len,
            });
        }

        let records = parse_records(input, offset)?;
        tracing::debug!(
            records = records.len(),
            bytes = input.len(),
            depth = self.depth,
            "decoded tlv records"
        );
        for (tag, payload) in records {
            self.entries.insert(tag, payload.to_vec());
        }
        self.decoded = self.decoded.saturating_add(input.len());
        Ok(())
    }

    /// Size in bytes of [`encode`](Self::encode)'s output.
    pub fn encoded_len(&self) -> usize {
        self.entries
            .values()
            .map(|payload| HEADER_LEN + payload.len())
            .sum()
    }

    /// Serialises every entry, one record per tag, in ascending tag order.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(self.encoded_len());
        self.encode_into(&mut writer);
        writer.flush()
    }

    /// Appends the encoded records to `writer`.
    pub fn encode_into(&self, writer: &mut Writer) {
        for (tag, payload) in &self.entries {
            writer.u32(*tag);
            // Every stored payload was length-checked on the way in.
            writer.u32(payload.len() as u32);
            writer.buf(payload);
        }
    }

    // ------------------------------------------------------------------ bytes

    /// Raw payload at `tag`.
    pub fn get_bytes(&self, tag: u32) -> Option<&[u8]> {
        self.entries.get(&tag).map(Vec::as_slice)
    }

    /// Stores `value` at `tag`, replacing any previous payload.
    pub fn put_bytes(&mut self, tag: u32, value: impl Into<Vec<u8>>) -> Result<&mut Self> {
        let value = value.into();
        if value.len() > MAX_PAYLOAD_LEN {
            return Err(TlvError::PayloadTooLarge {
                tag,
                len: value.len(),
            });
        }
        self.entries.insert(tag, value);
        Ok(self)
    }

    // ------------------------------------------------------------ fixed width

    fn fixed<T>(
        &self,
        tag: u32,
        width: usize,
        read: impl FnOnce(&mut Reader<'_>) -> std::result::Result<T, BufferError>,
    ) -> Result<Option<T>> {
        let Some(payload) = self.entries.get(&tag) else {
            return Ok(None);
        };
        read(&mut Reader::new(payload))
            .map(Some)
            .map_err(|_| TlvError::ShortPayload {
                tag,
                expected: width,
                actual: payload.len(),
            })
    }

    fixed_width_accessors! {
        i16 => get_i16, put_i16;
        u16 => get_u16, put_u16;
        i32 => get_i32, put_i32;
        u32 => get_u32, put_u32;
        i64 => get_i64, put_i64;
        u64 => get_u64, put_u64;
        f32 => get_f32, put_f32;
        f64 => get_f64, put_f64;
    }

    // ---------------------------------------------------------------- strings

    /// Payload at `tag` as UTF-8 text, borrowed.
    pub fn get_str(&self, tag: u32) -> Result<Option<&str>> {
        let Some(payload) = self.get_bytes(tag) else {
            return Ok(None);
        };
        std::str::from_utf8(payload)
            .map(Some)
            .map_err(|_| TlvError::InvalidUtf8 { tag })
    }

    pub fn get_string(&self, tag: u32) -> Result<Option<String>> {
        Ok(self.get_str(tag)?.map(str::to_owned))
    }

    /// Stores the UTF-8 bytes of `value`, without terminator.
    pub fn put_str(&mut self, tag: u32, value: &str) -> Result<&mut Self> {
        self.put_bytes(tag, value.as_bytes())
    }

    // ----------------------------------------------------------------- nested

    /// Decodes the payload at `tag` as a nested container.
    ///
    /// Unlike [`get_box`](Self::get_box) this reports why a present payload
    /// could not be decoded.
    pub fn try_get_box(&self, tag: u32) -> Result<Option<TlvBox>> {
        match self.get_bytes(tag) {
            Some(payload) => self.nested(payload).map(Some),
            None => Ok(None),
        }
    }

    /// Decodes the payload at `tag` as a nested container.
    ///
    /// A payload that fails to decode is reported as absent. The failure is
    /// logged at `warn` level so it stays distinguishable from a missing tag.
    pub fn get_box(&self, tag: u32) -> Option<TlvBox> {
        match self.try_get_box(tag) {
            Ok(nested) => nested,
            Err(err) => {
                tracing::warn!(
                    tag = format_args!("0x{tag:08x}"),
                    error = %err,
                    "nested tlv box failed to decode, treating as absent"
                );
                None
            }
        }
    }

    /// Stores the encoding of `nested` at `tag`.
    pub fn put_box(&mut self, tag: u32, nested: &TlvBox) -> Result<&mut Self> {
        self.put_bytes(tag, nested.encode())
    }

    /// Decodes `payload` one level deeper than `self`, inheriting its limits
    /// and the byte count decoded along the chain of enclosing containers.
    pub(crate) fn nested(&self, payload: &[u8]) -> Result<TlvBox> {
        let depth = self.depth.saturating_add(1);
        if depth > self.limits.max_depth {
            return Err(TlvError::DepthExceeded {
                limit: self.limits.max_depth,
            });
        }
        let mut nested = TlvBox {
            entries: BTreeMap::new(),
            limits: self.limits,
            depth,
            ancestry: self.ancestry.saturating_add(self.decoded),
            decoded: 0,
        };
        nested.decode(payload, 0)?;
        Ok(nested)
    }
}

/// Splits `input` into `(tag, payload)` records without copying.
///
/// `base` is the position of `input` within the caller's buffer and is only
/// used to report offsets.
fn parse_records(input: &[u8], base: usize) -> Result<Vec<(u32, &[u8])>> {
    let mut reader = Reader::new(input);
    let mut records = Vec::new();
    while !reader.is_empty() {
        let offset = base + reader.x;
        let remaining = reader.size();
        let truncated = move |_: BufferError| TlvError::TruncatedHeader { offset, remaining };
        let tag = reader.u32().map_err(truncated)?;
        let declared = reader.u32().map_err(truncated)?;

        let remaining = reader.size();
        let payload = reader
            .buf(declared as usize)
            .map_err(|_| TlvError::TruncatedPayload {
                tag,
                offset,
                declared,
                remaining,
            })?;
        records.push((tag, payload));
    }
    Ok(records)
}

/// Containers compare by their entries only.
impl PartialEq for TlvBox {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for TlvBox {}

impl fmt::Debug for TlvBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (tag, payload) in &self.entries {
            let preview = print_octets_default(payload);
            map.entry(
                &format_args!("0x{tag:08x}"),
                &format_args!("[{}] {preview}", payload.len()),
            );
        }
        map.finish()
    }
}
