//! Implementations for the [`WideString`] type.
//!
//! The type itself lives in the `lib.rs` file to avoid having to have a public alias, but
//! implementations live here.

use std::fmt;

use crate::bridge::transcode_into;
use crate::{WideString, WideWidth};

impl WideString {
    /// Creates a new empty [`WideString`] of `width`.
    #[inline]
    pub const fn new(width: WideWidth) -> Self {
        match width {
            WideWidth::Utf16 => WideString::Utf16(Vec::new()),
            WideWidth::Utf32 => WideString::Utf32(Vec::new()),
        }
    }

    /// The width of the units held.
    #[inline]
    pub const fn width(&self) -> WideWidth {
        match self {
            WideString::Utf16(_) => WideWidth::Utf16,
            WideString::Utf32(_) => WideWidth::Utf32,
        }
    }

    /// Returns the number of code units, not characters.
    #[inline]
    pub fn number_of_code_units(&self) -> usize {
        match self {
            WideString::Utf16(units) => units.len(),
            WideString::Utf32(units) => units.len(),
        }
    }

    /// Returns `true` if there are no code units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.number_of_code_units() == 0
    }

    /// Truncates this string, removing all contents but keeping the width.
    #[inline]
    pub fn clear(&mut self) {
        match self {
            WideString::Utf16(units) => units.clear(),
            WideString::Utf32(units) => units.clear(),
        }
    }

    /// The code units in native byte order, `number_of_code_units() * width().unit_size()`
    /// bytes long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            WideString::Utf16(units) => bytemuck::cast_slice(units),
            WideString::Utf32(units) => bytemuck::cast_slice(units),
        }
    }

    /// The UTF-16 code units, if this holds UTF-16.
    #[inline]
    pub fn as_utf16(&self) -> Option<&[u16]> {
        match self {
            WideString::Utf16(units) => Some(units),
            WideString::Utf32(_) => None,
        }
    }

    /// The UTF-32 code units, if this holds UTF-32.
    #[inline]
    pub fn as_utf32(&self) -> Option<&[u32]> {
        match self {
            WideString::Utf16(_) => None,
            WideString::Utf32(units) => Some(units),
        }
    }

    /// Converts the units to UTF-8, replacing the contents of `utf8`.
    pub fn to_utf8_into(&self, utf8: &mut String) {
        transcode_into(self.as_bytes(), self.width(), utf8);
    }

    /// Converts the units to UTF-8.
    ///
    /// Units which do not form valid UTF-16 or UTF-32 become U+FFFD.
    pub fn to_utf8(&self) -> String {
        let mut utf8 = String::new();
        self.to_utf8_into(&mut utf8);
        utf8
    }
}

impl Default for WideString {
    #[inline]
    fn default() -> Self {
        Self::new(WideWidth::NATIVE)
    }
}

impl From<Vec<u16>> for WideString {
    #[inline]
    fn from(units: Vec<u16>) -> Self {
        WideString::Utf16(units)
    }
}

impl From<Vec<u32>> for WideString {
    #[inline]
    fn from(units: Vec<u32>) -> Self {
        WideString::Utf32(units)
    }
}

impl From<&str> for WideString {
    /// Converts using the native width.
    #[inline]
    fn from(source: &str) -> Self {
        crate::UnicodeConverter::native().to_wide_str(source)
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_utf8())
    }
}
