//! Conversion between UTF-8 and wide UTF-16 or UTF-32 text.
//!
//! Rust strings are UTF-8, but plenty of interfaces want "wide" strings: sequences of
//! UTF-16 code units where `wchar_t` is 16 bits wide (Windows) or of UTF-32 code units
//! where it is 32 bits wide (most other platforms).  This crate converts between the two
//! worlds without ever failing: malformed input is replaced rather than rejected.
//!
//! # UTF-8 to wide text
//!
//! [`to_utf16`] and [`to_utf32`] always produce the named encoding.  A
//! [`UnicodeConverter`] is configured with a [`WideWidth`] and converts between UTF-8 and a
//! [`WideString`] of that width in both directions; [`UnicodeConverter::default`] and the
//! free [`to_wide`] functions use the platform's native width, [`WideWidth::NATIVE`].
//!
//! ```
//! use widetext::{UnicodeConverter, WideWidth};
//!
//! assert_eq!(widetext::to_utf16_str("h😀"), vec![0x68, 0xD83D, 0xDE00]);
//! assert_eq!(widetext::to_utf32_str("h😀"), vec![0x68, 0x1F600]);
//!
//! let wide = UnicodeConverter::new(WideWidth::Utf16).to_wide_str("h😀");
//! assert_eq!(wide.as_utf16(), Some(&[0x68, 0xD83D, 0xDE00][..]));
//! ```
//!
//! Input is decoded by [`Utf8Decoder`].  Every malformed or truncated sequence becomes a
//! single U+FFFD and decoding carries on after it:
//!
//! ```
//! assert_eq!(widetext::to_utf16(b"a\x80b\xE2\x82"), vec![0x61, 0xFFFD, 0x62, 0xFFFD]);
//! ```
//!
//! # Wide text to UTF-8
//!
//! [`to_utf8`] takes `&[u16]` as UTF-16 and `&[u32]` as UTF-32:
//!
//! ```
//! assert_eq!(widetext::to_utf8(&[0xD83Du16, 0xDE00]), "😀");
//! assert_eq!(widetext::to_utf8(&[0x1F600u32]), "😀");
//! ```
//!
//! # Other encodings
//!
//! The building blocks are public as well: the [`TextEncoding`] descriptors
//! [`Utf8Encoding`], [`Utf16Encoding`] and [`Utf32Encoding`] (generic over a
//! [`byteorder::ByteOrder`]) and the [`TextConverter`] which converts bytes between any
//! two of them.

#![warn(
    missing_copy_implementations,
    unused_extern_crates,
    unused_qualifications,
    clippy::all
)]

mod bridge;
mod converter;
mod decoder;
mod encoder;
mod encoding;
mod error;
mod transcoder;
mod utilities;
mod wide;
mod width;

pub use byteorder::{BE, BigEndian, LE, LittleEndian, NativeEndian};

pub use crate::bridge::{to_utf8, to_utf8_into, to_utf8_nul, to_utf8_ptr};
pub use crate::converter::{
    UnicodeConverter, to_utf16, to_utf16_cstr, to_utf16_into, to_utf16_ptr, to_utf16_str,
    to_utf32, to_utf32_cstr, to_utf32_into, to_utf32_ptr, to_utf32_str, to_wide, to_wide_cstr,
    to_wide_into, to_wide_ptr, to_wide_str,
};
pub use crate::decoder::{REPLACEMENT_CHARACTER, Scalars, Utf8Decoder};
pub use crate::encoder::{encode_utf16, encode_utf32, push_utf16, push_utf32};
pub use crate::encoding::{Probe, TextEncoding, Utf8Encoding, Utf16Encoding, Utf32Encoding};
pub use crate::error::WidthError;
pub use crate::transcoder::TextConverter;
pub use crate::width::{WideUnit, WideWidth};

/// Owned wide text, in either of the two wide widths.
///
/// This is what [`UnicodeConverter`] produces.  Which variant you get is decided by the
/// converter's [`WideWidth`], not by the text.
///
/// # Examples
///
/// ```
/// use widetext::{WideString, WideWidth};
///
/// let s = WideString::from(vec![0x68u16, 0x69]);
/// assert_eq!(s.width(), WideWidth::Utf16);
/// assert_eq!(s.to_utf8(), "hi");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum WideString {
    /// UTF-16 code units.
    Utf16(Vec<u16>),
    /// UTF-32 code units.
    Utf32(Vec<u32>),
}
