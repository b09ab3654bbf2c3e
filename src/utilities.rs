//! Small helpers around surrogate code units shared by the encoders and probes.

/// First code point of the supplementary planes.
pub(crate) const SUPPLEMENTARY_PLANES_START: u32 = 0x1_0000;

/// Mask of the ten payload bits carried by each surrogate.
pub(crate) const SURROGATE_PAYLOAD_MASK: u32 = 0x3FF;

pub(crate) const LEADING_SURROGATE_START: u32 = 0xD800;
pub(crate) const TRAILING_SURROGATE_START: u32 = 0xDC00;

#[inline]
pub(crate) const fn is_leading_surrogate(code_unit: u16) -> bool {
    matches!(code_unit, 0xD800..=0xDBFF)
}

#[inline]
pub(crate) const fn is_trailing_surrogate(code_unit: u16) -> bool {
    matches!(code_unit, 0xDC00..=0xDFFF)
}

#[inline]
pub(crate) const fn is_surrogate(scalar: u32) -> bool {
    matches!(scalar, 0xD800..=0xDFFF)
}

/// Combines a surrogate pair into the code point it encodes.
///
/// The caller must have checked both halves with [`is_leading_surrogate`] and
/// [`is_trailing_surrogate`], otherwise the result is meaningless.
#[inline]
pub(crate) const fn decode_surrogates(leading: u16, trailing: u16) -> u32 {
    (((leading as u32) & SURROGATE_PAYLOAD_MASK) << 10)
        + ((trailing as u32) & SURROGATE_PAYLOAD_MASK)
        + SUPPLEMENTARY_PLANES_START
}
