use alloc::string::ToString;

use rstest::rstest;

use crate::{Value, parse};

/// Canonical texts print back byte-identically: parse then stringify is the
/// identity on the stringifier's own output format.
#[rstest]
#[case("null")]
#[case("true")]
#[case("false")]
#[case("0")]
#[case("-0")]
#[case("1")]
#[case("-1.5")]
#[case("3.25")]
#[case("0.0001")]
#[case("1e+20")]
#[case("1.234e+20")]
#[case("1e-05")]
#[case("1.7976931348623157e+308")]
#[case("5e-324")]
#[case(r#""""#)]
#[case(r#""Hello""#)]
#[case(r#""Hello\nWorld""#)]
#[case(r#""\" \\ \b \f \n \r \t""#)]
#[case(r#""\u0001 \u001F""#)]
#[case("[]")]
#[case("[null]")]
#[case(r#"[null,false,true,123,"abc",[1,2,3]]"#)]
#[case("{}")]
#[case(r#"{"a":1,"b":[true,false],"c":{"d":null}}"#)]
fn canonical_roundtrip(#[case] text: &str) {
    let v = parse(text).unwrap();
    assert_eq!(v.to_string(), text);
}

#[test]
fn whitespace_and_key_order_are_not_preserved() {
    let v = parse(" { \"b\" : [ 1 , 2 ] , \"a\" : null } ").unwrap();
    // insertion order, minimal separators
    assert_eq!(v.to_string(), r#"{"b":[1,2],"a":null}"#);
}

#[test]
fn solidus_is_not_escaped_on_output() {
    let v = parse(r#""a\/b""#).unwrap();
    assert_eq!(v.to_string(), r#""a/b""#);
}

#[test]
fn non_ascii_stays_raw() {
    let v = parse(r#""¢ € 𝄞""#).unwrap();
    assert_eq!(v.to_string(), "\"¢ € 𝄞\"");
}

#[test]
fn escaped_nul_prints_as_unicode_escape() {
    let v = Value::String("a\u{0}b".into());
    assert_eq!(v.to_string(), "\"a\\u0000b\"");
}

#[test]
fn control_chars_print_with_short_escapes_where_they_exist() {
    let v = Value::String("\u{8}\u{c}\n\r\t\u{1}".into());
    assert_eq!(v.to_string(), "\"\\b\\f\\n\\r\\t\\u0001\"");
}

#[test]
fn number_formatting_matches_parse() {
    // spot checks; the quickcheck property covers the general case
    for text in ["123", "-7.5", "1e+17", "10000000000000000"] {
        let v = parse(text).unwrap();
        assert_eq!(parse(&v.to_string()).unwrap(), v);
    }
}

#[test]
fn non_finite_numbers_print_null() {
    assert_eq!(Value::Number(f64::NAN).to_string(), "null");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "null");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "null");
}

#[test]
fn stringify_then_parse_is_structural_identity() {
    let source = r#"
        {
            "title": "routing table",
            "routes": [
                {"dst": "10.0.0.0/8", "via": null, "metric": 100},
                {"dst": "0.0.0.0/0", "via": "192.168.1.1", "metric": 0.5}
            ],
            "dirty": false
        }
    "#;
    let v = parse(source).unwrap();
    assert_eq!(parse(&v.to_string()).unwrap(), v);
}
