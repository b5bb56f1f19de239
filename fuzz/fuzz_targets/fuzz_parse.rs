#![no_main]

use arbitrary::Arbitrary;
use jsontree::{parse, parse_bytes};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// Parser recursion tracks nesting depth, and raw fuzz input can make depth
/// proportional to its length; keep inputs bounded.
const MAX_LEN: usize = 16 << 10;

/// Entropy budget for generated documents, which nest faster per byte than
/// raw text does.
const MAX_GEN_LEN: usize = 4 << 10;

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn run(data: &[u8]) {
    if data.len() > MAX_LEN {
        return;
    }
    let Some((mode, rest)) = data.split_first() else {
        return;
    };

    if mode & 1 == 0 {
        // Raw-bytes mode: parsing must never panic, and any accepted
        // document must survive a canonical-text round trip.
        if let Ok(value) = parse_bytes(rest) {
            let text = value.to_string();
            let reparsed = parse(&text).expect("canonical text must re-parse");
            assert_eq!(reparsed, value);
        }
    } else {
        // Generated mode: everything serde_json can serialize, this parser
        // must accept.
        let rest = &rest[..rest.len().min(MAX_GEN_LEN)];
        let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(rest)) else {
            return;
        };
        let serialized =
            serde_json::to_vec(&value.0).expect("serde_json can serialize its own value");
        let parsed = parse_bytes(&serialized).expect("serde_json output is valid JSON");
        let text = parsed.to_string();
        assert_eq!(parse(&text).expect("canonical text must re-parse"), parsed);
    }
}

fuzz_target!(|data: &[u8]| run(data));
