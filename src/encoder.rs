//! Re-encoding of single code points into UTF-16 and UTF-32 code units.

use crate::utilities::{
    LEADING_SURROGATE_START, SUPPLEMENTARY_PLANES_START, SURROGATE_PAYLOAD_MASK,
    TRAILING_SURROGATE_START,
};

/// Encodes `scalar` as UTF-16 into `buffer`, returning the used part.
///
/// Code points up to `0xFFFF` take a single code unit, everything above is split into a
/// surrogate pair.  Nothing checks that `scalar` is at most `0x10FFFF`: larger values still
/// produce a pair from the same arithmetic, so only feed this valid scalar values.
///
/// # Examples
///
/// ```
/// let mut buffer = [0; 2];
/// assert_eq!(widetext::encode_utf16(0x41, &mut buffer), &[0x0041]);
/// assert_eq!(widetext::encode_utf16(0x1F600, &mut buffer), &[0xD83D, 0xDE00]);
/// ```
#[inline]
pub fn encode_utf16(scalar: u32, buffer: &mut [u16; 2]) -> &mut [u16] {
    if scalar < SUPPLEMENTARY_PLANES_START {
        buffer[0] = scalar as u16;
        return &mut buffer[..1];
    }

    let offset = scalar - SUPPLEMENTARY_PLANES_START;
    let leading = ((offset >> 10) & SURROGATE_PAYLOAD_MASK) | LEADING_SURROGATE_START;
    let trailing = (offset & SURROGATE_PAYLOAD_MASK) | TRAILING_SURROGATE_START;

    // Both values are below 0xE000 at this point, so narrowing is exact.
    buffer[0] = leading as u16;
    buffer[1] = trailing as u16;
    &mut buffer[..]
}

/// Appends the UTF-16 encoding of `scalar` to `utf16`.
#[inline]
pub fn push_utf16(scalar: u32, utf16: &mut Vec<u16>) {
    let mut buffer = [0; 2];
    utf16.extend_from_slice(encode_utf16(scalar, &mut buffer));
}

/// Encodes `scalar` as a single UTF-32 code unit.
///
/// UTF-32 units are as wide as a code point, so this never needs surrogates.
#[inline]
pub const fn encode_utf32(scalar: u32) -> u32 {
    scalar
}

/// Appends the UTF-32 encoding of `scalar` to `utf32`.
#[inline]
pub fn push_utf32(scalar: u32, utf32: &mut Vec<u32>) {
    utf32.push(encode_utf32(scalar));
}
