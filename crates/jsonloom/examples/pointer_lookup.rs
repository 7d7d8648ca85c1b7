//! Parse a document once, then address it by pointer.
//!
//! Run with: `cargo run --example pointer_lookup`

use jsonloom::{parse_str, reindent};

fn main() {
    let text = r#"{"servers":[{"host":"alpha","port":8080},{"host":"beta","port":9090}]}"#;

    let root = parse_str(text).expect("valid JSON").expect("non-empty input");
    let beta_port = root
        .pointer("/servers/1/port")
        .expect("well-formed pointer")
        .expect("present in the document");
    println!("beta listens on {}", beta_port.as_number().unwrap().as_i32().unwrap());

    println!("{}", reindent(text));
}
