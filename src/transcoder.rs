//! Generic conversion between any two [`TextEncoding`]s.

use std::fmt;

use log::debug;

use crate::decoder::next_sequence;
use crate::encoding::TextEncoding;

/// Converts bytes in one [`TextEncoding`] into bytes of another.
///
/// Input which cannot be decoded, and code points the target encoding cannot represent,
/// are replaced by the default character, `'?'` unless set with
/// [`TextConverter::with_default_char`].
///
/// # Examples
///
/// ```
/// use widetext::{TextConverter, Utf16Encoding, Utf8Encoding};
/// use byteorder::BE;
///
/// let utf16 = Utf16Encoding::<BE>::new();
/// let converter = TextConverter::new(&utf16, &Utf8Encoding);
///
/// let mut utf8 = Vec::new();
/// let errors = converter.convert(b"\x00h\x00i\xDC\x00", &mut utf8);
/// assert_eq!(utf8, b"hi?");
/// assert_eq!(errors, 1);
/// ```
#[derive(Copy, Clone)]
pub struct TextConverter<'a> {
    in_encoding: &'a dyn TextEncoding,
    out_encoding: &'a dyn TextEncoding,
    default_char: u32,
}

impl<'a> TextConverter<'a> {
    /// Creates a converter from `in_encoding` to `out_encoding`.
    pub fn new(in_encoding: &'a dyn TextEncoding, out_encoding: &'a dyn TextEncoding) -> Self {
        Self {
            in_encoding,
            out_encoding,
            default_char: u32::from(b'?'),
        }
    }

    /// Sets the character written in place of anything that cannot be converted.
    ///
    /// The default character must itself be representable in the target encoding,
    /// otherwise it is dropped from the output.  Every dropped character still counts
    /// as an error, including one decoded from the source that equals the default.
    #[must_use]
    pub fn with_default_char(mut self, default_char: char) -> Self {
        self.default_char = u32::from(default_char);
        self
    }

    /// Converts all of `source`, appending the result to `destination`.
    ///
    /// Returns the number of characters which had to be replaced.
    pub fn convert(&self, source: &[u8], destination: &mut Vec<u8>) -> usize {
        self.convert_with(source, destination, |scalar| scalar)
    }

    /// Like [`TextConverter::convert`], but passes every decoded code point through
    /// `transform` before encoding it.
    pub fn convert_with<F>(
        &self,
        source: &[u8],
        destination: &mut Vec<u8>,
        mut transform: F,
    ) -> usize
    where
        F: FnMut(u32) -> u32,
    {
        let mut buffer = vec![0; self.out_encoding.max_sequence_length()];
        let mut remaining = source;
        let mut errors = 0;

        while !remaining.is_empty() {
            let (scalar, read) = next_sequence(self.in_encoding, remaining);
            remaining = &remaining[read..];

            let (scalar, malformed) = match scalar {
                Some(scalar) => (transform(scalar), false),
                None => (self.default_char, true),
            };
            if malformed {
                errors += 1;
            }

            let mut written = self.encode(scalar, &mut buffer);
            if written == 0 {
                if !malformed {
                    errors += 1;
                }
                if scalar != self.default_char {
                    written = self.encode(self.default_char, &mut buffer);
                }
            }
            destination.extend_from_slice(&buffer[..written]);
        }

        if errors > 0 {
            debug!(
                "{} to {} conversion replaced {} characters",
                self.in_encoding.name(),
                self.out_encoding.name(),
                errors
            );
        }
        errors
    }

    /// Encodes `scalar` with the target encoding, growing `buffer` if the encoding
    /// reports a longer sequence than it announced.
    ///
    /// Returns `0` if the encoding still does not fit after growing.
    fn encode(&self, scalar: u32, buffer: &mut Vec<u8>) -> usize {
        let written = self.out_encoding.convert(scalar, buffer);
        if written <= buffer.len() {
            return written;
        }
        buffer.resize(written, 0);
        let written = self.out_encoding.convert(scalar, buffer);
        if written <= buffer.len() { written } else { 0 }
    }
}

impl fmt::Debug for TextConverter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextConverter")
            .field("in_encoding", &self.in_encoding.name())
            .field("out_encoding", &self.out_encoding.name())
            .field("default_char", &self.default_char)
            .finish()
    }
}
