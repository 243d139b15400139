//! Hex previews of binary payloads for diagnostics.

/// Formats up to `max` bytes of `octets` as space separated lowercase hex.
///
/// When bytes are cut off, the preview ends with a count of the hidden tail.
///
/// ```
/// use tlvbox_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(print_octets(&[0xde, 0xad, 0xbe, 0xef], 2), "de ad ... (+2 bytes)");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let shown = octets.len().min(max);
    let mut out = String::with_capacity(shown * 3 + 16);
    for (i, byte) in octets[..shown].iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02x}"));
    }
    if octets.len() > shown {
        if shown > 0 {
            out.push(' ');
        }
        out.push_str(&format!("... (+{} bytes)", octets.len() - shown));
    }
    out
}

/// [`print_octets`] capped at 16 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 16)
}
