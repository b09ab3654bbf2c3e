//! Conversion from UTF-8 into UTF-16, UTF-32 and wide text.
//!
//! The explicit `to_utf16*` and `to_utf32*` functions always produce the named encoding.
//! [`UnicodeConverter`] produces wide text in whichever width it was configured with, and
//! the `to_wide*` free functions do the same for the native width.
//! All of them decode through [`Utf8Decoder`], whether the input is a `&str`, a byte slice
//! or a nul-terminated string, so malformed bytes are replaced the same way everywhere.

use std::ffi::{CStr, c_char};

use log::debug;

use crate::bridge::transcode_into;
use crate::decoder::Utf8Decoder;
use crate::encoder::{push_utf16, push_utf32};
use crate::{WideString, WideWidth};

/// Converts UTF-8 bytes to UTF-16 code units, replacing `utf16`'s contents.
pub fn to_utf16_into(utf8: &[u8], utf16: &mut Vec<u16>) {
    utf16.clear();
    utf16.reserve(utf8.len());
    for (scalar, _) in Utf8Decoder::new(utf8) {
        push_utf16(scalar, utf16);
    }
}

/// Converts UTF-8 bytes to UTF-16 code units.
///
/// Malformed sequences become U+FFFD.
///
/// # Examples
///
/// ```
/// assert_eq!(widetext::to_utf16(b"A"), vec![0x0041]);
/// assert_eq!(widetext::to_utf16(b"\xF0\x9F\x98\x80"), vec![0xD83D, 0xDE00]);
/// assert_eq!(widetext::to_utf16(b"\xE2\x82"), vec![0xFFFD]);
/// ```
pub fn to_utf16(utf8: &[u8]) -> Vec<u16> {
    let mut utf16 = Vec::new();
    to_utf16_into(utf8, &mut utf16);
    utf16
}

/// Converts a string slice to UTF-16 code units.
#[inline]
pub fn to_utf16_str(utf8: &str) -> Vec<u16> {
    to_utf16(utf8.as_bytes())
}

/// Converts a nul-terminated string to UTF-16 code units, excluding the terminator.
#[inline]
pub fn to_utf16_cstr(utf8: &CStr) -> Vec<u16> {
    to_utf16(utf8.to_bytes())
}

/// Converts the nul-terminated string at `utf8` to UTF-16 code units.
///
/// # Panics
///
/// Panics if `utf8` is null.
///
/// # Safety
///
/// `utf8` must satisfy the requirements of [`CStr::from_ptr`].
pub unsafe fn to_utf16_ptr(utf8: *const c_char) -> Vec<u16> {
    to_utf16_cstr(unsafe { cstr_from_ptr(utf8) })
}

/// Converts UTF-8 bytes to UTF-32 code units, replacing `utf32`'s contents.
pub fn to_utf32_into(utf8: &[u8], utf32: &mut Vec<u32>) {
    utf32.clear();
    utf32.reserve(utf8.len());
    for (scalar, _) in Utf8Decoder::new(utf8) {
        push_utf32(scalar, utf32);
    }
}

/// Converts UTF-8 bytes to UTF-32 code units.
///
/// Malformed sequences become U+FFFD.
///
/// # Examples
///
/// ```
/// assert_eq!(widetext::to_utf32(b"A"), vec![0x0000_0041]);
/// assert_eq!(widetext::to_utf32(b"\xF0\x9F\x98\x80"), vec![0x1F600]);
/// assert_eq!(widetext::to_utf32(b"\x80"), vec![0xFFFD]);
/// ```
pub fn to_utf32(utf8: &[u8]) -> Vec<u32> {
    let mut utf32 = Vec::new();
    to_utf32_into(utf8, &mut utf32);
    utf32
}

/// Converts a string slice to UTF-32 code units.
#[inline]
pub fn to_utf32_str(utf8: &str) -> Vec<u32> {
    to_utf32(utf8.as_bytes())
}

/// Converts a nul-terminated string to UTF-32 code units, excluding the terminator.
#[inline]
pub fn to_utf32_cstr(utf8: &CStr) -> Vec<u32> {
    to_utf32(utf8.to_bytes())
}

/// Converts the nul-terminated string at `utf8` to UTF-32 code units.
///
/// # Panics
///
/// Panics if `utf8` is null.
///
/// # Safety
///
/// `utf8` must satisfy the requirements of [`CStr::from_ptr`].
pub unsafe fn to_utf32_ptr(utf8: *const c_char) -> Vec<u32> {
    to_utf32_cstr(unsafe { cstr_from_ptr(utf8) })
}

/// Wraps a raw nul-terminated string, asserting it is not null.
///
/// # Safety
///
/// Same as [`CStr::from_ptr`] for non-null pointers.
unsafe fn cstr_from_ptr<'a>(utf8: *const c_char) -> &'a CStr {
    assert!(!utf8.is_null(), "null pointer passed as a UTF-8 string");
    unsafe { CStr::from_ptr(utf8) }
}

/// Converts UTF-8 to wide text of a configured [`WideWidth`].
///
/// Configure the width once and pass the converter around; [`UnicodeConverter::default`]
/// uses the platform's native `wchar_t` width.
///
/// # Examples
///
/// ```
/// use widetext::{UnicodeConverter, WideString, WideWidth};
///
/// let converter = UnicodeConverter::new(WideWidth::Utf16);
/// let wide = converter.to_wide_str("😀");
/// assert_eq!(wide, WideString::Utf16(vec![0xD83D, 0xDE00]));
/// assert_eq!(wide.to_utf8(), "😀");
///
/// let converter = UnicodeConverter::new(WideWidth::Utf32);
/// assert_eq!(converter.to_wide_str("😀"), WideString::Utf32(vec![0x1F600]));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnicodeConverter {
    width: WideWidth,
}

impl UnicodeConverter {
    /// Creates a converter producing wide text of `width`.
    #[inline]
    pub const fn new(width: WideWidth) -> Self {
        Self { width }
    }

    /// Creates a converter producing wide text of the native `wchar_t` width.
    #[inline]
    pub const fn native() -> Self {
        Self::new(WideWidth::NATIVE)
    }

    /// The configured wide width.
    #[inline]
    pub const fn width(&self) -> WideWidth {
        self.width
    }

    /// Converts UTF-8 bytes to wide text, replacing the contents of `wide`.
    ///
    /// If `wide` holds the other width it is replaced by an empty string of the
    /// configured width first.
    pub fn to_wide_into(&self, utf8: &[u8], wide: &mut WideString) {
        if wide.width() != self.width {
            *wide = WideString::new(self.width);
        }
        match wide {
            WideString::Utf16(units) => to_utf16_into(utf8, units),
            WideString::Utf32(units) => to_utf32_into(utf8, units),
        }
    }

    /// Converts UTF-8 bytes to wide text.
    pub fn to_wide(&self, utf8: &[u8]) -> WideString {
        let mut wide = WideString::new(self.width);
        self.to_wide_into(utf8, &mut wide);
        wide
    }

    /// Converts a string slice to wide text.
    #[inline]
    pub fn to_wide_str(&self, utf8: &str) -> WideString {
        self.to_wide(utf8.as_bytes())
    }

    /// Converts a nul-terminated string to wide text, excluding the terminator.
    #[inline]
    pub fn to_wide_cstr(&self, utf8: &CStr) -> WideString {
        self.to_wide(utf8.to_bytes())
    }

    /// Converts the nul-terminated string at `utf8` to wide text.
    ///
    /// # Panics
    ///
    /// Panics if `utf8` is null.
    ///
    /// # Safety
    ///
    /// `utf8` must satisfy the requirements of [`CStr::from_ptr`].
    pub unsafe fn to_wide_ptr(&self, utf8: *const c_char) -> WideString {
        self.to_wide_cstr(unsafe { cstr_from_ptr(utf8) })
    }

    /// Converts wide text to UTF-8, replacing the contents of `utf8`.
    ///
    /// The units are read at the configured width.  A [`WideString`] of the other width
    /// is reinterpreted as its native-endian bytes, so its text is generally lost to
    /// replacement characters; use [`WideString::to_utf8`] to follow the string's own
    /// width instead.
    pub fn wide_to_utf8_into(&self, wide: &WideString, utf8: &mut String) {
        if wide.width() != self.width {
            debug!("reading {} text as {}", wide.width(), self.width);
        }
        transcode_into(wide.as_bytes(), self.width, utf8);
    }

    /// Converts wide text to UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use widetext::{UnicodeConverter, WideString, WideWidth};
    ///
    /// let converter = UnicodeConverter::new(WideWidth::Utf16);
    /// let wide = WideString::Utf16(vec![0xD83D, 0xDE00]);
    /// assert_eq!(converter.wide_to_utf8(&wide), "😀");
    /// ```
    pub fn wide_to_utf8(&self, wide: &WideString) -> String {
        let mut utf8 = String::new();
        self.wide_to_utf8_into(wide, &mut utf8);
        utf8
    }
}

/// Converts UTF-8 bytes to wide text of the native width, replacing the contents of
/// `wide`.
#[inline]
pub fn to_wide_into(utf8: &[u8], wide: &mut WideString) {
    UnicodeConverter::native().to_wide_into(utf8, wide);
}

/// Converts UTF-8 bytes to wide text of the native width, see [`WideWidth::NATIVE`].
///
/// # Examples
///
/// ```
/// use widetext::WideWidth;
///
/// let wide = widetext::to_wide(b"hi");
/// assert_eq!(wide.width(), WideWidth::NATIVE);
/// assert_eq!(wide.to_utf8(), "hi");
/// ```
#[inline]
pub fn to_wide(utf8: &[u8]) -> WideString {
    UnicodeConverter::native().to_wide(utf8)
}

/// Converts a string slice to wide text of the native width.
#[inline]
pub fn to_wide_str(utf8: &str) -> WideString {
    UnicodeConverter::native().to_wide_str(utf8)
}

/// Converts a nul-terminated string to wide text of the native width, excluding the
/// terminator.
#[inline]
pub fn to_wide_cstr(utf8: &CStr) -> WideString {
    UnicodeConverter::native().to_wide_cstr(utf8)
}

/// Converts the nul-terminated string at `utf8` to wide text of the native width.
///
/// # Panics
///
/// Panics if `utf8` is null.
///
/// # Safety
///
/// `utf8` must satisfy the requirements of [`CStr::from_ptr`].
pub unsafe fn to_wide_ptr(utf8: *const c_char) -> WideString {
    unsafe { UnicodeConverter::native().to_wide_ptr(utf8) }
}
