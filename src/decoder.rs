//! The UTF-8 decoding state machine.
//!
//! Decoding walks the input with the two-phase probe of [`next_sequence`]: look at one
//! byte, and if it announces a longer sequence look again at exactly that many bytes.
//! Every step consumes at least one byte and never more than remain, so decoding any
//! finite slice terminates.  Malformed sequences are skipped as a unit and reported as
//! [`REPLACEMENT_CHARACTER`].

use std::iter::FusedIterator;

use log::trace;

use crate::encoding::{Probe, TextEncoding, Utf8Encoding};

/// U+FFFD, substituted for every sequence that cannot be decoded.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// Probes the character at the start of `bytes` using `encoding`.
///
/// Returns the decoded scalar, or `None` if the bytes are malformed, together with the
/// number of bytes this character occupies.  A sequence cut off by the end of `bytes`
/// occupies everything that is left.
///
/// `bytes` must not be empty.
pub(crate) fn next_sequence<T>(encoding: &T, bytes: &[u8]) -> (Option<u32>, usize)
where
    T: TextEncoding + ?Sized,
{
    debug_assert!(!bytes.is_empty());

    let mut read = 1;
    let mut probe = encoding.query_convert(&bytes[..read]);
    while let Probe::NeedMore(needed) = probe {
        // A window that does not grow can never settle, treat it like a truncated tail.
        if needed <= read || needed > bytes.len() {
            break;
        }
        read = needed;
        probe = encoding.query_convert(&bytes[..read]);
    }

    match probe {
        Probe::Scalar(scalar) => (Some(scalar), read),
        Probe::Invalid => (None, read),
        Probe::NeedMore(_) => (None, bytes.len()),
    }
}

/// Iterator decoding UTF-8 bytes into `(scalar, length)` pairs.
///
/// `length` is the number of bytes the item was decoded from; it is never zero.
/// Malformed input yields [`REPLACEMENT_CHARACTER`].
///
/// # Examples
///
/// ```
/// use widetext::Utf8Decoder;
///
/// let decoded: Vec<_> = Utf8Decoder::new(b"a\xC3\xA4\x80").collect();
/// assert_eq!(decoded, vec![(0x61, 1), (0xE4, 2), (0xFFFD, 1)]);
/// ```
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Utf8Decoder<'a> {
    remaining: &'a [u8],
}

impl<'a> Utf8Decoder<'a> {
    /// Creates a decoder over `bytes`.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { remaining: bytes }
    }

    /// Returns the bytes that have not been decoded yet.
    #[inline]
    pub const fn remaining(&self) -> &'a [u8] {
        self.remaining
    }

    /// Drops the lengths, yielding only the scalar values.
    #[inline]
    pub fn scalars(self) -> Scalars<'a> {
        Scalars { decoder: self }
    }
}

impl<'a> From<&'a str> for Utf8Decoder<'a> {
    #[inline]
    fn from(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Utf8Decoder<'a> {
    #[inline]
    fn from(source: &'a [u8]) -> Self {
        Self::new(source)
    }
}

impl Iterator for Utf8Decoder<'_> {
    type Item = (u32, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let (scalar, read) = next_sequence(&Utf8Encoding, self.remaining);
        let scalar = scalar.unwrap_or_else(|| {
            trace!(
                "replacing malformed UTF-8 sequence {:02X?}",
                &self.remaining[..read]
            );
            REPLACEMENT_CHARACTER
        });
        self.remaining = &self.remaining[read..];
        Some((scalar, read))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.len();
        (usize::from(len > 0), Some(len))
    }
}

impl FusedIterator for Utf8Decoder<'_> {}

/// Iterator yielding the scalar values of a [`Utf8Decoder`].
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Scalars<'a> {
    decoder: Utf8Decoder<'a>,
}

impl Scalars<'_> {
    /// Returns the bytes that have not been decoded yet.
    #[inline]
    pub const fn remaining(&self) -> &[u8] {
        self.decoder.remaining()
    }
}

impl Iterator for Scalars<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next().map(|(scalar, _)| scalar)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.decoder.size_hint()
    }
}

impl FusedIterator for Scalars<'_> {}
