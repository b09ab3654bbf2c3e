//! End to end conversions through the public entry points.

use rstest::rstest;
use widetext::{
    TextConverter, UnicodeConverter, Utf8Decoder, Utf8Encoding, Utf16Encoding, WideString,
    WideWidth, to_utf8, to_utf8_nul, to_utf16, to_utf16_cstr, to_utf32, to_utf32_str,
};

#[test]
fn ascii() {
    assert_eq!(to_utf16(&[0x41]), vec![0x0041]);
    assert_eq!(to_utf32(&[0x41]), vec![0x0000_0041]);
}

#[test]
fn supplementary_plane() {
    assert_eq!(to_utf16(&[0xF0, 0x9F, 0x98, 0x80]), vec![0xD83D, 0xDE00]);
    assert_eq!(to_utf32(&[0xF0, 0x9F, 0x98, 0x80]), vec![0x1F600]);
}

#[test]
fn truncated_sequence_is_absorbed() {
    let mut decoder = Utf8Decoder::new(&[0xE2, 0x82]);
    assert_eq!(decoder.next(), Some((0xFFFD, 2)));
    assert!(decoder.remaining().is_empty());
    assert_eq!(decoder.next(), None);
}

#[test]
fn lone_continuation_byte() {
    assert_eq!(to_utf32(&[0x80]), vec![0xFFFD]);
}

#[rstest]
#[case(WideWidth::Utf16)]
#[case(WideWidth::Utf32)]
fn empty_in_all_directions(#[case] width: WideWidth) {
    assert!(to_utf16(&[]).is_empty());
    assert!(to_utf32(&[]).is_empty());
    assert!(UnicodeConverter::new(width).to_wide(&[]).is_empty());
    assert_eq!(to_utf8::<u16>(&[]), "");
    assert_eq!(to_utf8::<u32>(&[]), "");
    assert_eq!(WideString::new(width).to_utf8(), "");
}

#[test]
fn wide_utf16_to_utf8() {
    let utf8 = to_utf8(&[0xD83Du16, 0xDE00]);
    assert_eq!(utf8.as_bytes(), [0xF0, 0x9F, 0x98, 0x80]);
}

#[test]
fn bridge_agrees_with_explicit_transcoder() {
    let wide = [0x48u16, 0xD83D, 0xDE00, 0xDC00, 0x21];
    let mut expected = Vec::new();
    TextConverter::new(&Utf16Encoding::<widetext::NativeEndian>::new(), &Utf8Encoding)
        .with_default_char(char::REPLACEMENT_CHARACTER)
        .convert(bytemuck::cast_slice(&wide), &mut expected);
    assert_eq!(to_utf8(&wide).as_bytes(), expected);
}

#[test]
fn nul_terminated_inputs() {
    assert_eq!(to_utf16_cstr(c"abc"), vec![0x61, 0x62, 0x63]);
    assert_eq!(to_utf8_nul(&[0x61u16, 0x62, 0x63, 0, 0x64]), "abc");
}

#[test]
fn native_width_round_trip() {
    let converter = UnicodeConverter::default();
    let wide = converter.to_wide_str("Hello \0ä日本 語🚀🦀");
    assert_eq!(wide.width(), WideWidth::NATIVE);
    assert_eq!(wide.to_utf8(), "Hello \0ä日本 語🚀🦀");
}

#[test]
fn mixed_garbage() {
    // Valid, stray continuation, overlong, truncated four byte sequence.
    let bytes = b"ok\xBF\xC0\xAFend\xF0\x9F\x98";
    assert_eq!(
        to_utf32(bytes),
        vec![0x6F, 0x6B, 0xFFFD, 0xFFFD, 0x65, 0x6E, 0x64, 0xFFFD]
    );
    assert_eq!(to_utf8(&to_utf16(bytes)), "ok\u{FFFD}\u{FFFD}end\u{FFFD}");
}

#[test]
fn width_from_configuration() {
    let width: WideWidth = "utf-16".parse().unwrap();
    let converter = UnicodeConverter::new(width);
    assert_eq!(
        converter.to_wide_str("\u{10000}"),
        WideString::Utf16(vec![0xD800, 0xDC00])
    );

    let width = WideWidth::try_from(4).unwrap();
    assert_eq!(
        UnicodeConverter::new(width).to_wide_str("\u{10000}").as_utf32(),
        Some(&to_utf32_str("\u{10000}")[..])
    );
}
