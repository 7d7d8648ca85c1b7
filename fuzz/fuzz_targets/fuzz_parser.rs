#![no_main]
use arbitrary::Arbitrary;
use jsonloom::{parse_str, reindent};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
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

fn parser(data: &[u8]) {
    // Raw bytes: the parser must accept or reject without panicking.
    let text = String::from_utf8_lossy(data);
    if let Ok(Some(tree)) = parse_str(&text) {
        // Accepted documents must survive print → reparse and
        // reindent → reparse with a structurally equal result.
        let compact = tree.to_string();
        let reparsed = parse_str(&compact)
            .expect("printed output must parse")
            .expect("printed output holds a document");
        assert_eq!(tree, reparsed);

        let pretty = reindent(&compact);
        let reindented = parse_str(&pretty)
            .expect("reindented output must parse")
            .expect("reindented output holds a document");
        assert_eq!(tree, reindented);
    }

    // Structured: anything serde_json can serialize as a document must parse.
    if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(data)) {
        if value.0.is_object() || value.0.is_array() {
            let serialized =
                serde_json::to_string(&value.0).expect("arbitrary value must serialize");
            parse_str(&serialized)
                .expect("serialized document must parse")
                .expect("serialized document is non-empty");
        }
    }
}

fuzz_target!(|data: &[u8]| parser(data));
