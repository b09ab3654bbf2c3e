//! Conversion from wide text back to UTF-8.
//!
//! Wide units are read as the raw bytes of the buffer, in native byte order, and run
//! through a [`TextConverter`] from UTF-16 or UTF-32 depending on the unit type.

use std::mem;

use byteorder::NativeEndian;

use crate::encoding::{TextEncoding, Utf16Encoding, Utf32Encoding, Utf8Encoding};
use crate::transcoder::TextConverter;
use crate::{WideUnit, WideWidth};

const NATIVE_UTF16: Utf16Encoding<NativeEndian> = Utf16Encoding::new();
const NATIVE_UTF32: Utf32Encoding<NativeEndian> = Utf32Encoding::new();

/// Converts the native-endian bytes of a wide buffer of `width`, replacing `utf8`'s contents.
pub(crate) fn transcode_into(bytes: &[u8], width: WideWidth, utf8: &mut String) {
    let source: &dyn TextEncoding = match width {
        WideWidth::Utf16 => &NATIVE_UTF16,
        WideWidth::Utf32 => &NATIVE_UTF32,
    };

    let mut buffer = mem::take(utf8).into_bytes();
    buffer.clear();
    buffer.reserve(bytes.len());
    TextConverter::new(source, &Utf8Encoding)
        .with_default_char(char::REPLACEMENT_CHARACTER)
        .convert(bytes, &mut buffer);

    // The UTF-8 descriptor refuses surrogates and out of range values, so this is valid.
    *utf8 = match String::from_utf8(buffer) {
        Ok(utf8) => utf8,
        Err(error) => String::from_utf8_lossy(error.as_bytes()).into_owned(),
    };
}

/// Converts wide units to UTF-8, replacing the contents of `utf8`.
pub fn to_utf8_into<U: WideUnit>(wide: &[U], utf8: &mut String) {
    transcode_into(bytemuck::cast_slice(wide), U::WIDTH, utf8);
}

/// Converts wide units to UTF-8.
///
/// [`u16`] units are read as UTF-16 and [`u32`] units as UTF-32.  Lone surrogates and
/// values which are no Unicode scalar value become U+FFFD.
///
/// # Examples
///
/// ```
/// assert_eq!(widetext::to_utf8(&[0xD83Du16, 0xDE00]), "😀");
/// assert_eq!(widetext::to_utf8(&[0x1F600u32]), "😀");
/// assert_eq!(widetext::to_utf8(&[0x41u16, 0xDC00]), "A\u{FFFD}");
/// ```
pub fn to_utf8<U: WideUnit>(wide: &[U]) -> String {
    let mut utf8 = String::new();
    to_utf8_into(wide, &mut utf8);
    utf8
}

/// Converts wide units up to the first zero unit to UTF-8.
///
/// Without a zero unit the whole slice is converted.
pub fn to_utf8_nul<U: WideUnit>(wide: &[U]) -> String {
    let len = wide
        .iter()
        .position(|unit| *unit == U::zeroed())
        .unwrap_or(wide.len());
    to_utf8(&wide[..len])
}

/// Converts the zero-terminated wide string at `wide` to UTF-8.
///
/// # Panics
///
/// Panics if `wide` is null.
///
/// # Safety
///
/// `wide` must be valid for reads of every unit up to and including the terminating zero
/// unit, and that memory must not be mutated for the duration of the call.
pub unsafe fn to_utf8_ptr<U: WideUnit>(wide: *const U) -> String {
    assert!(!wide.is_null(), "null pointer passed as a wide string");

    let mut len = 0;
    while unsafe { wide.add(len).read() } != U::zeroed() {
        len += 1;
    }
    to_utf8(unsafe { std::slice::from_raw_parts(wide, len) })
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_surrogate_pair() {
        assert_eq!(
            to_utf8(&[0xD83Du16, 0xDE00]).as_bytes(),
            [0xF0, 0x9F, 0x98, 0x80]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_utf8::<u16>(&[]), "");
        assert_eq!(to_utf8::<u32>(&[]), "");
    }

    #[test]
    fn test_utf32() {
        assert_eq!(to_utf8(&[0x68u32, 0xE4, 0x65E5, 0x1F980]), "hä日🦀");
    }

    #[test]
    fn test_invalid_units() {
        // A leading surrogate without its partner takes the following unit with it.
        assert_eq!(to_utf8(&[0xD800u16, 0x41, 0x42]), "\u{FFFD}B");
        assert_eq!(to_utf8(&[0x41u16, 0xD800]), "A\u{FFFD}");
        assert_eq!(to_utf8(&[0xDFFFu32, 0x11_0000, 0x41]), "\u{FFFD}\u{FFFD}A");
    }

    #[test]
    fn test_into_discards_previous_contents() {
        let mut utf8 = String::from("stale");
        to_utf8_into(&[0x6Fu16, 0x6B], &mut utf8);
        assert_eq!(utf8, "ok");
    }

    #[test]
    fn test_nul() {
        assert_eq!(to_utf8_nul(&[0x61u16, 0x62, 0, 0x63]), "ab");
        assert_eq!(to_utf8_nul(&[0x61u32, 0x62]), "ab");
        assert_eq!(to_utf8_nul::<u32>(&[0]), "");
    }

    #[test]
    fn test_ptr() {
        let wide = [0xD83Eu16, 0xDD80, 0x21, 0, 0x7A];
        assert_eq!(unsafe { to_utf8_ptr(wide.as_ptr()) }, "🦀!");

        let wide = [0x1F980u32, 0];
        assert_eq!(unsafe { to_utf8_ptr(wide.as_ptr()) }, "🦀");
    }

    #[test]
    #[should_panic(expected = "null pointer")]
    fn test_null_ptr() {
        unsafe { to_utf8_ptr::<u16>(std::ptr::null()) };
    }

    #[quickcheck]
    fn utf16_matches_std(text: String) -> bool {
        let wide: Vec<u16> = text.encode_utf16().collect();
        to_utf8(&wide) == text
    }

    #[quickcheck]
    fn utf32_matches_std(text: String) -> bool {
        let wide: Vec<u32> = text.chars().map(u32::from).collect();
        to_utf8(&wide) == text
    }
}
