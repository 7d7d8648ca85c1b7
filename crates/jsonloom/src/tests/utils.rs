use alloc::string::String;

use quickcheck::{Arbitrary, Gen};

use crate::{Value, parse_str};

/// Parses `input`, panicking on failure or an empty document.
pub fn parse(input: &str) -> Value {
    parse_str(input)
        .expect("test input must parse")
        .expect("test input must hold a document")
}

/// A random JSON document with a container at the root.
///
/// Generated as a `serde_json::Value` so the serialized text and the reparsed
/// structure can both be checked against an independent oracle. Object keys
/// are unique by construction (map insertion dedups), which the round-trip
/// properties require.
#[derive(Clone, Debug)]
pub struct Doc(pub serde_json::Value);

fn finite_number(g: &mut Gen) -> serde_json::Value {
    let mut value = f64::arbitrary(g);
    while !value.is_finite() {
        value = f64::arbitrary(g);
    }
    serde_json::Value::Number(serde_json::Number::from_f64(value).expect("value is finite"))
}

fn scalar(g: &mut Gen) -> serde_json::Value {
    match usize::arbitrary(g) % 4 {
        0 => serde_json::Value::Null,
        1 => serde_json::Value::Bool(bool::arbitrary(g)),
        2 => finite_number(g),
        _ => serde_json::Value::String(String::arbitrary(g)),
    }
}

fn node(g: &mut Gen, depth: usize) -> serde_json::Value {
    if depth == 0 {
        return scalar(g);
    }
    match usize::arbitrary(g) % 6 {
        4 => array(g, depth - 1),
        5 => object(g, depth - 1),
        _ => scalar(g),
    }
}

fn array(g: &mut Gen, depth: usize) -> serde_json::Value {
    let len = usize::arbitrary(g) % 4;
    serde_json::Value::Array((0..len).map(|_| node(g, depth)).collect())
}

fn object(g: &mut Gen, depth: usize) -> serde_json::Value {
    let len = usize::arbitrary(g) % 4;
    let mut map = serde_json::Map::new();
    for _ in 0..len {
        map.insert(String::arbitrary(g), node(g, depth));
    }
    serde_json::Value::Object(map)
}

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = 1 + usize::arbitrary(g) % 2;
        let root = if bool::arbitrary(g) {
            array(g, depth)
        } else {
            object(g, depth)
        };
        Self(root)
    }
}
