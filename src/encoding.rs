//! Encoding descriptors used by the decoder and the [`TextConverter`](crate::TextConverter).
//!
//! A [`TextEncoding`] knows two things: how to recognise one encoded character at the start
//! of a byte slice ([`TextEncoding::query_convert`]) and how to write one code point out
//! again ([`TextEncoding::convert`]).  The byte oriented UTF-16 and UTF-32 descriptors are
//! generic over a [`byteorder::ByteOrder`], so the same type describes both the
//! little-endian and big-endian variants as well as a native in-memory wide buffer.

use std::fmt;
use std::marker::PhantomData;
use std::ops::RangeInclusive;

use byteorder::ByteOrder;

use crate::encoder::encode_utf16;
use crate::utilities::{decode_surrogates, is_leading_surrogate, is_trailing_surrogate};

/// Result of probing the start of a byte slice for one encoded character.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Probe {
    /// A complete character was decoded.
    Scalar(u32),
    /// The bytes can never form a valid character.
    Invalid,
    /// The window is too short; at least this many bytes are needed to decide.
    NeedMore(usize),
}

/// A character encoding that can be probed and written one code point at a time.
pub trait TextEncoding {
    /// Canonical name of the encoding, e.g. `"UTF-8"`.
    fn name(&self) -> &'static str;

    /// Longest byte sequence [`TextEncoding::convert`] can produce.
    fn max_sequence_length(&self) -> usize;

    /// Probes the character starting at `bytes[0]`, looking at no byte past `bytes.len()`.
    ///
    /// An empty window always reports [`Probe::NeedMore`].
    fn query_convert(&self, bytes: &[u8]) -> Probe;

    /// Encodes `scalar` into `bytes`.
    ///
    /// Returns the number of bytes the encoding of `scalar` takes, or `0` if this encoding
    /// cannot represent it.  Nothing is written if `bytes` is too short.
    fn convert(&self, scalar: u32, bytes: &mut [u8]) -> usize;
}

/// UTF-8.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Utf8Encoding;

impl Utf8Encoding {
    /// Number of bytes a sequence starting with `lead` claims to have, or `None` for bytes
    /// which can never start a sequence.
    ///
    /// The five and six byte forms of RFC 2279 are still recognised
    /// here so a lead byte swallows its whole sequence, they are rejected once complete.
    #[inline]
    const fn sequence_length(lead: u8) -> Option<usize> {
        match lead {
            0x00..=0x7F => Some(1),
            0xC0..=0xDF => Some(2),
            0xE0..=0xEF => Some(3),
            0xF0..=0xF7 => Some(4),
            0xF8..=0xFB => Some(5),
            0xFC..=0xFD => Some(6),
            0x80..=0xBF | 0xFE..=0xFF => None,
        }
    }
}

/// Checks a complete multi-byte sequence against the well-formed UTF-8 byte table.
///
/// This rejects overlong forms, encoded surrogates and anything above `U+10FFFF`.
fn is_legal_utf8(sequence: &[u8]) -> bool {
    let [lead, second, rest @ ..] = sequence else {
        return false;
    };
    if rest.len() > 2 || !rest.iter().all(|&byte| matches!(byte, 0x80..=0xBF)) {
        return false;
    }

    let second_range: RangeInclusive<u8> = match lead {
        0xC2..=0xDF | 0xE1..=0xEC | 0xEE..=0xEF | 0xF1..=0xF3 => 0x80..=0xBF,
        0xE0 => 0xA0..=0xBF,
        0xED => 0x80..=0x9F,
        0xF0 => 0x90..=0xBF,
        0xF4 => 0x80..=0x8F,
        _ => return false,
    };
    second_range.contains(second)
}

/// Mask of the value bits of a continuation byte.
const CONT_MASK: u8 = 0b0011_1111;

impl TextEncoding for Utf8Encoding {
    fn name(&self) -> &'static str {
        "UTF-8"
    }

    fn max_sequence_length(&self) -> usize {
        4
    }

    fn query_convert(&self, bytes: &[u8]) -> Probe {
        let Some(&lead) = bytes.first() else {
            return Probe::NeedMore(1);
        };
        let width = match Self::sequence_length(lead) {
            Some(1) => return Probe::Scalar(u32::from(lead)),
            Some(width) => width,
            None => return Probe::Invalid,
        };
        let Some(sequence) = bytes.get(..width) else {
            return Probe::NeedMore(width);
        };
        if !is_legal_utf8(sequence) {
            return Probe::Invalid;
        }

        // Only the low 5, 4 or 3 bits of the lead byte carry data for widths 2, 3 and 4.
        let init = u32::from(lead & (0x7F >> width));
        let scalar = sequence[1..]
            .iter()
            .fold(init, |acc, byte| (acc << 6) | u32::from(byte & CONT_MASK));
        Probe::Scalar(scalar)
    }

    fn convert(&self, scalar: u32, bytes: &mut [u8]) -> usize {
        let Some(character) = char::from_u32(scalar) else {
            return 0;
        };
        let len = character.len_utf8();
        if let Some(buffer) = bytes.get_mut(..len) {
            character.encode_utf8(buffer);
        }
        len
    }
}

/// UTF-16 with byte order `E`.
pub struct Utf16Encoding<E: ByteOrder> {
    _endian: PhantomData<E>,
}

impl<E: ByteOrder> Utf16Encoding<E> {
    /// Creates the descriptor.
    pub const fn new() -> Self {
        Self {
            _endian: PhantomData,
        }
    }
}

impl<E: ByteOrder> TextEncoding for Utf16Encoding<E> {
    fn name(&self) -> &'static str {
        "UTF-16"
    }

    fn max_sequence_length(&self) -> usize {
        4
    }

    fn query_convert(&self, bytes: &[u8]) -> Probe {
        let Some(first) = bytes.get(..2) else {
            return Probe::NeedMore(2);
        };
        let code_unit = E::read_u16(first);

        if is_leading_surrogate(code_unit) {
            let Some(second) = bytes.get(2..4) else {
                return Probe::NeedMore(4);
            };
            let trailing = E::read_u16(second);
            if !is_trailing_surrogate(trailing) {
                return Probe::Invalid;
            }
            Probe::Scalar(decode_surrogates(code_unit, trailing))
        } else if is_trailing_surrogate(code_unit) {
            Probe::Invalid
        } else {
            Probe::Scalar(u32::from(code_unit))
        }
    }

    fn convert(&self, scalar: u32, bytes: &mut [u8]) -> usize {
        if char::from_u32(scalar).is_none() {
            return 0;
        }
        let mut buffer = [0; 2];
        let code_units = encode_utf16(scalar, &mut buffer);
        let len = code_units.len() * 2;
        if let Some(out) = bytes.get_mut(..len) {
            E::write_u16_into(code_units, out);
        }
        len
    }
}

/// UTF-32 with byte order `E`.
pub struct Utf32Encoding<E: ByteOrder> {
    _endian: PhantomData<E>,
}

impl<E: ByteOrder> Utf32Encoding<E> {
    /// Creates the descriptor.
    pub const fn new() -> Self {
        Self {
            _endian: PhantomData,
        }
    }
}

impl<E: ByteOrder> TextEncoding for Utf32Encoding<E> {
    fn name(&self) -> &'static str {
        "UTF-32"
    }

    fn max_sequence_length(&self) -> usize {
        4
    }

    fn query_convert(&self, bytes: &[u8]) -> Probe {
        let Some(code_unit) = bytes.get(..4) else {
            return Probe::NeedMore(4);
        };
        let scalar = E::read_u32(code_unit);
        match char::from_u32(scalar) {
            Some(_) => Probe::Scalar(scalar),
            None => Probe::Invalid,
        }
    }

    fn convert(&self, scalar: u32, bytes: &mut [u8]) -> usize {
        if char::from_u32(scalar).is_none() {
            return 0;
        }
        if let Some(out) = bytes.get_mut(..4) {
            E::write_u32(out, scalar);
        }
        4
    }
}

// Manual impls: deriving would put needless bounds on `E`, which is only a marker.
macro_rules! impl_marker_traits {
    ($name:ident) => {
        impl<E: ByteOrder> Default for $name<E> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<E: ByteOrder> Clone for $name<E> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<E: ByteOrder> Copy for $name<E> {}

        impl<E: ByteOrder> fmt::Debug for $name<E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).finish()
            }
        }
    };
}

impl_marker_traits!(Utf16Encoding);
impl_marker_traits!(Utf32Encoding);

#[cfg(test)]
mod tests {
    use byteorder::{BE, LE};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[0x41], Probe::Scalar(0x41))]
    #[case(&[0x80], Probe::Invalid)]
    #[case(&[0xBF], Probe::Invalid)]
    #[case(&[0xFE], Probe::Invalid)]
    #[case(&[0xFF], Probe::Invalid)]
    #[case(&[0xC3], Probe::NeedMore(2))]
    #[case(&[0xE2], Probe::NeedMore(3))]
    #[case(&[0xF0], Probe::NeedMore(4))]
    #[case(&[0xF8], Probe::NeedMore(5))]
    #[case(&[0xFC], Probe::NeedMore(6))]
    #[case(&[0xE2, 0x82], Probe::NeedMore(3))]
    fn test_utf8_probe_short_window(#[case] bytes: &[u8], #[case] expected: Probe) {
        assert_eq!(Utf8Encoding.query_convert(bytes), expected);
    }

    #[rstest]
    #[case(&[0xC3, 0xA4], Probe::Scalar(0xE4))]
    #[case(&[0xE2, 0x82, 0xAC], Probe::Scalar(0x20AC))]
    #[case(&[0xED, 0x9F, 0xBF], Probe::Scalar(0xD7FF))]
    #[case(&[0xEE, 0x80, 0x80], Probe::Scalar(0xE000))]
    #[case(&[0xF0, 0x9F, 0x98, 0x80], Probe::Scalar(0x1F600))]
    #[case(&[0xF4, 0x8F, 0xBF, 0xBF], Probe::Scalar(0x10FFFF))]
    fn test_utf8_probe_complete(#[case] bytes: &[u8], #[case] expected: Probe) {
        assert_eq!(Utf8Encoding.query_convert(bytes), expected);
    }

    #[rstest]
    #[case::overlong_two_byte(&[0xC0, 0x80])]
    #[case::overlong_two_byte_c1(&[0xC1, 0xBF])]
    #[case::overlong_three_byte(&[0xE0, 0x80, 0x80])]
    #[case::overlong_four_byte(&[0xF0, 0x80, 0x80, 0x80])]
    #[case::encoded_surrogate(&[0xED, 0xA0, 0x80])]
    #[case::above_max(&[0xF4, 0x90, 0x80, 0x80])]
    #[case::lead_f5(&[0xF5, 0x80, 0x80, 0x80])]
    #[case::bad_continuation(&[0xE2, 0x41, 0xAC])]
    #[case::five_byte(&[0xF8, 0x88, 0x80, 0x80, 0x80])]
    #[case::six_byte(&[0xFC, 0x84, 0x80, 0x80, 0x80, 0x80])]
    fn test_utf8_probe_invalid(#[case] bytes: &[u8]) {
        assert_eq!(Utf8Encoding.query_convert(bytes), Probe::Invalid);
    }

    #[test]
    fn test_utf8_probe_ignores_bytes_past_sequence() {
        assert_eq!(
            Utf8Encoding.query_convert(&[0xC3, 0xA4, 0xFF]),
            Probe::Scalar(0xE4)
        );
    }

    #[test]
    fn test_utf8_probe_empty() {
        assert_eq!(Utf8Encoding.query_convert(&[]), Probe::NeedMore(1));
    }

    #[test]
    fn test_utf8_convert() {
        let mut buffer = [0; 4];
        assert_eq!(Utf8Encoding.convert(0x41, &mut buffer), 1);
        assert_eq!(buffer[0], 0x41);
        assert_eq!(Utf8Encoding.convert(0x1F600, &mut buffer), 4);
        assert_eq!(buffer, [0xF0, 0x9F, 0x98, 0x80]);
        assert_eq!(Utf8Encoding.convert(0xD800, &mut buffer), 0);
        assert_eq!(Utf8Encoding.convert(0x11_0000, &mut buffer), 0);
    }

    #[test]
    fn test_utf8_convert_short_buffer() {
        let mut buffer = [0; 2];
        assert_eq!(Utf8Encoding.convert(0x20AC, &mut buffer), 3);
        assert_eq!(buffer, [0, 0]);
    }

    #[test]
    fn test_utf16_probe() {
        let encoding = Utf16Encoding::<LE>::new();
        assert_eq!(encoding.query_convert(&[0x41]), Probe::NeedMore(2));
        assert_eq!(encoding.query_convert(&[0x41, 0x00]), Probe::Scalar(0x41));
        assert_eq!(encoding.query_convert(&[0x3D, 0xD8]), Probe::NeedMore(4));
        assert_eq!(
            encoding.query_convert(&[0x3D, 0xD8, 0x00, 0xDE]),
            Probe::Scalar(0x1F600)
        );
        assert_eq!(
            encoding.query_convert(&[0x3D, 0xD8, 0x41, 0x00]),
            Probe::Invalid
        );
        assert_eq!(encoding.query_convert(&[0x00, 0xDE]), Probe::Invalid);
    }

    #[test]
    fn test_utf16_probe_big_endian() {
        let encoding = Utf16Encoding::<BE>::new();
        assert_eq!(encoding.query_convert(&[0x00, 0x41]), Probe::Scalar(0x41));
        assert_eq!(
            encoding.query_convert(&[0xD8, 0x3D, 0xDE, 0x00]),
            Probe::Scalar(0x1F600)
        );
    }

    #[test]
    fn test_utf16_convert() {
        let encoding = Utf16Encoding::<BE>::new();
        let mut buffer = [0; 4];
        assert_eq!(encoding.convert(0x41, &mut buffer), 2);
        assert_eq!(buffer[..2], [0x00, 0x41]);
        assert_eq!(encoding.convert(0x1F600, &mut buffer), 4);
        assert_eq!(buffer, [0xD8, 0x3D, 0xDE, 0x00]);
        assert_eq!(encoding.convert(0xDC00, &mut buffer), 0);
    }

    #[test]
    fn test_utf32_probe() {
        let encoding = Utf32Encoding::<LE>::new();
        assert_eq!(encoding.query_convert(&[0x41, 0, 0]), Probe::NeedMore(4));
        assert_eq!(encoding.query_convert(&[0x41, 0, 0, 0]), Probe::Scalar(0x41));
        assert_eq!(
            encoding.query_convert(&[0x00, 0xF6, 0x01, 0x00]),
            Probe::Scalar(0x1F600)
        );
        assert_eq!(encoding.query_convert(&[0x00, 0xD8, 0, 0]), Probe::Invalid);
        assert_eq!(encoding.query_convert(&[0, 0, 0x11, 0]), Probe::Invalid);
    }

    #[test]
    fn test_utf32_convert() {
        let encoding = Utf32Encoding::<BE>::new();
        let mut buffer = [0; 4];
        assert_eq!(encoding.convert(0x1F600, &mut buffer), 4);
        assert_eq!(buffer, [0x00, 0x01, 0xF6, 0x00]);
        assert_eq!(encoding.convert(0x11_0000, &mut buffer), 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(Utf8Encoding.name(), "UTF-8");
        assert_eq!(Utf16Encoding::<LE>::new().name(), "UTF-16");
        assert_eq!(Utf32Encoding::<LE>::new().name(), "UTF-32");
    }
}
