//! Configuration of the wide unit width.

use std::fmt;
use std::str::FromStr;

use crate::WidthError;

/// The representation used for "wide" text.
///
/// The native width follows the platform's `wchar_t`: 16 bits on Windows, 32 bits
/// everywhere else.  It is fixed at compile time, see [`WideWidth::NATIVE`].
///
/// # Examples
///
/// ```
/// use widetext::WideWidth;
///
/// assert_eq!(WideWidth::from_unit_size(2), Ok(WideWidth::Utf16));
/// assert_eq!("utf-32".parse::<WideWidth>(), Ok(WideWidth::Utf32));
/// assert_eq!(WideWidth::Utf16.unit_size(), 2);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WideWidth {
    /// Two byte units, supplementary planes use surrogate pairs.
    Utf16,
    /// Four byte units, one unit per code point.
    Utf32,
}

impl WideWidth {
    /// The width of the target platform's `wchar_t`.
    #[cfg(windows)]
    pub const NATIVE: WideWidth = WideWidth::Utf16;

    /// The width of the target platform's `wchar_t`.
    #[cfg(not(windows))]
    pub const NATIVE: WideWidth = WideWidth::Utf32;

    /// Size of one unit in bytes.
    #[inline]
    pub const fn unit_size(self) -> usize {
        match self {
            WideWidth::Utf16 => 2,
            WideWidth::Utf32 => 4,
        }
    }

    /// Looks up the width for a unit size in bytes.
    pub fn from_unit_size(size: usize) -> Result<Self, WidthError> {
        match size {
            2 => Ok(WideWidth::Utf16),
            4 => Ok(WideWidth::Utf32),
            _ => Err(WidthError::UnsupportedUnitSize(size)),
        }
    }

    /// Canonical name of the encoding, as accepted by [`str::parse`].
    pub const fn name(self) -> &'static str {
        match self {
            WideWidth::Utf16 => "UTF-16",
            WideWidth::Utf32 => "UTF-32",
        }
    }
}

impl Default for WideWidth {
    #[inline]
    fn default() -> Self {
        Self::NATIVE
    }
}

impl TryFrom<usize> for WideWidth {
    type Error = WidthError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::from_unit_size(size)
    }
}

impl FromStr for WideWidth {
    type Err = WidthError;

    /// Parses `utf16`, `utf-16`, `utf32`, `utf-32` or `native`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf16" | "utf-16" => Ok(WideWidth::Utf16),
            "utf32" | "utf-32" => Ok(WideWidth::Utf32),
            "native" => Ok(WideWidth::NATIVE),
            _ => Err(WidthError::UnknownEncoding(s.to_owned())),
        }
    }
}

impl fmt::Display for WideWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A code unit type usable as wide text: [`u16`] for UTF-16 and [`u32`] for UTF-32.
pub trait WideUnit: bytemuck::Pod + Eq + private::Sealed {
    /// The width this unit type stands for.
    const WIDTH: WideWidth;
}

impl WideUnit for u16 {
    const WIDTH: WideWidth = WideWidth::Utf16;
}

impl WideUnit for u32 {
    const WIDTH: WideWidth = WideWidth::Utf32;
}
