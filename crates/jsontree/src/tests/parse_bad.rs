use rstest::rstest;

use crate::{ParseError, parse, parse_bytes};

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t \r\n ")]
fn expect_value(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::ExpectValue), "{text:?}");
}

#[rstest]
#[case("nul")]
#[case("nulx")]
// the reference treated a malformed `true` differently from `false`/`null`;
// all malformed literals are rejected the same way here
#[case("tru")]
#[case("truu")]
#[case("fals")]
#[case("?")]
#[case("+0")]
#[case("+1")]
#[case(".123")]
#[case("1.")]
#[case("1e")]
#[case("1e+")]
#[case("-")]
#[case("INF")]
#[case("inf")]
#[case("NAN")]
#[case("nan")]
#[case("[1,]")]
#[case(r#"["a", nul]"#)]
fn invalid_value(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::InvalidValue), "{text:?}");
}

#[rstest]
#[case("null x")]
#[case("null null")]
// the number grammar stops after the first valid token
#[case("0123")]
#[case("0x0")]
#[case("0x123")]
#[case("1e3 4")]
#[case("{}[]")]
fn not_single_value(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::NotSingleValue), "{text:?}");
}

#[rstest]
#[case("1e309")]
#[case("-1e309")]
#[case("1.2e+310")]
fn number_too_big(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::NumberTooBig), "{text:?}");
}

#[test]
fn underflow_is_not_too_big() {
    assert!(parse("1e-309").is_ok());
    assert!(parse("-1e-10000").is_ok());
}

#[rstest]
#[case("\"")]
#[case("\"abc")]
#[case("\"abc\\\"")]
fn missing_closing_quote(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::MissingClosingQuote), "{text:?}");
}

#[test]
fn nul_byte_terminates_string_scan() {
    assert_eq!(
        parse_bytes(b"\"a\x00b\""),
        Err(ParseError::MissingClosingQuote)
    );
}

#[rstest]
#[case(r#""\v""#)]
#[case(r#""\'""#)]
#[case(r#""\0""#)]
#[case(r#""\x12""#)]
fn invalid_escape(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::InvalidEscape), "{text:?}");
}

#[rstest]
#[case(b"\"\x01\"".as_slice())]
#[case(b"\"\x1f\"".as_slice())]
// raw bytes that are not valid UTF-8
#[case(b"\"\xff\"".as_slice())]
#[case(b"\"\xc3\x28\"".as_slice())]
fn invalid_string_char(#[case] text: &[u8]) {
    assert_eq!(parse_bytes(text), Err(ParseError::InvalidStringChar));
}

#[rstest]
#[case(r#""\u""#)]
#[case(r#""\u0""#)]
#[case(r#""\u01""#)]
#[case(r#""\u012""#)]
#[case(r#""\u/000""#)]
#[case(r#""\uG000""#)]
#[case(r#""\u0/00""#)]
#[case(r#""\u0G00""#)]
#[case(r#""\u000G""#)]
#[case(r#""\u 123""#)]
fn invalid_unicode_hex(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::InvalidUnicodeHex), "{text:?}");
}

#[rstest]
#[case(r#""\uD800""#)]
#[case(r#""\uDBFF""#)]
#[case(r#""\uD800\\""#)]
#[case(r#""\uD800\uD800""#)]
#[case(r#""\uD800\u0"#)]
// a lone low surrogate is not a scalar value
#[case(r#""\uDC00""#)]
fn invalid_surrogate(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::InvalidSurrogate), "{text:?}");
}

#[rstest]
#[case("[1")]
#[case("[1}")]
#[case("[1 2")]
#[case("[[]")]
fn missing_comma_or_bracket(#[case] text: &str) {
    assert_eq!(
        parse(text),
        Err(ParseError::MissingCommaOrBracket),
        "{text:?}"
    );
}

#[rstest]
#[case(r#"{"a"}"#)]
#[case(r#"{"a","b"}"#)]
#[case(r#"{"a";1}"#)]
fn missing_colon(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::MissingColon), "{text:?}");
}

#[rstest]
#[case(r#"{"a":1"#)]
#[case(r#"{"a":1]"#)]
#[case(r#"{"a":1 "b""#)]
#[case(r#"{"a":{}"#)]
fn missing_comma_or_brace(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::MissingCommaOrBrace), "{text:?}");
}

#[rstest]
#[case("{:1,")]
#[case("{1:1,")]
#[case("{true:1,")]
#[case("{false:1,")]
#[case("{null:1,")]
#[case("{[]:1,")]
#[case("{{}:1,")]
#[case("{\"a\":1,")]
#[case("{")]
fn missing_key(#[case] text: &str) {
    assert_eq!(parse(text), Err(ParseError::MissingKey), "{text:?}");
}

/// Errors deep inside a nested document abandon the whole parse; nothing
/// of the partially built tree is observable afterwards.
#[rstest]
#[case(r#"[[1,2],[3,"#, ParseError::ExpectValue)]
#[case(r#"{"a":[1,{"b":nul}]}"#, ParseError::InvalidValue)]
#[case(r#"[true, "unterminated"#, ParseError::MissingClosingQuote)]
fn nested_failures_surface_inner_error(#[case] text: &str, #[case] expected: ParseError) {
    assert_eq!(parse(text), Err(expected), "{text:?}");
}
