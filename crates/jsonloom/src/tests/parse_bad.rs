use alloc::string::String;

use rstest::rstest;

use crate::{ErrorKind, ParseError, ParseOptions, StructuralError, StructuralParser, parse_str};

fn fail(input: &str) -> ParseError {
    parse_str(input).expect_err("input must be rejected")
}

#[rstest]
#[case::missing_colon(r#"{"a" 1}"#)]
#[case::double_comma("[1,,2]")]
#[case::trailing_comma_in_object(r#"{"a":1,}"#)]
#[case::trailing_comma_in_array("[1,]")]
#[case::leading_comma_in_object(r#"{,"a":1}"#)]
#[case::leading_comma_in_array("[,1]")]
#[case::colon_in_array(r#"["a":1]"#)]
#[case::bare_colon_in_object("{:1}")]
#[case::value_without_key("{1}")]
#[case::key_without_value(r#"{"a"}"#)]
#[case::two_keys_without_colon(r#"{"a" "b":1}"#)]
#[case::mismatched_close_brace(r#"{"a":1]"#)]
#[case::mismatched_close_bracket("[1}")]
#[case::missing_comma_in_array("[1 2]")]
#[case::missing_comma_in_object(r#"{"a":1 "b":2}"#)]
#[case::top_level_number("42")]
#[case::top_level_string(r#""x""#)]
#[case::top_level_literal("true")]
#[case::empty_key(r#"{"":1}"#)]
fn structural_violations(#[case] input: &str) {
    assert!(fail(input).is_structural(), "input: {input}");
}

#[rstest]
#[case::stray_character("@")]
#[case::misspelled_true("[trze]")]
#[case::misspelled_null("[nulx]")]
#[case::truncated_literal("[tru]")]
#[case::leading_zero("[01]")]
#[case::bare_minus("[-]")]
#[case::missing_fraction_digits("[1.]")]
#[case::missing_exponent_digits("[1e]")]
#[case::signed_exponent_without_digits("[1e+]")]
#[case::explicit_plus("[+1]")]
#[case::bare_dot("[.5]")]
#[case::unterminated_string(r#"["abc"#)]
#[case::control_character_in_string("[\"a\tb\"]")]
fn lexical_violations(#[case] input: &str) {
    assert!(fail(input).is_lex(), "input: {input}");
}

#[rstest]
#[case::bad_escape(r#"["\x"]"#)]
#[case::bad_unicode_digit(r#"["\u12G4"]"#)]
#[case::truncated_unicode(r#"["\u12"]"#)]
#[case::lone_high_surrogate(r#"["\uD800"]"#)]
#[case::lone_low_surrogate(r#"["\uDC00"]"#)]
#[case::high_surrogate_without_low(r#"["\uD83DA"]"#)]
fn escape_violations(#[case] input: &str) {
    assert!(fail(input).is_lex(), "input: {input}");
}

#[rstest]
#[case::object_key(r#"{"#)]
#[case::object_colon(r#"{"a""#)]
#[case::object_value(r#"{"a":"#)]
#[case::array_value("[")]
#[case::array_comma("[1")]
fn truncated_documents_are_rejected(#[case] input: &str) {
    assert!(parse_str(input).is_err(), "input: {input}");
}

#[test]
fn missing_colon_reports_what_it_found() {
    let error = fail(r#"{"a" 1}"#);
    assert_eq!(
        error.kind,
        ErrorKind::Structural(StructuralError::ExpectedColon("a number"))
    );
    assert_eq!(error.line, 1);
    assert_eq!(error.column, 6);
}

#[test]
fn double_comma_reports_a_missing_value() {
    assert_eq!(
        fail("[1,,2]").kind,
        ErrorKind::Structural(StructuralError::ExpectedValue("','"))
    );
}

#[test]
fn trailing_comma_reports_a_missing_member() {
    assert_eq!(
        fail(r#"{"a":1,}"#).kind,
        ErrorKind::Structural(StructuralError::ExpectedPropertyName("'}'"))
    );
}

#[test]
fn empty_pending_key_is_its_own_error() {
    assert_eq!(
        fail(r#"{"":1}"#).kind,
        ErrorKind::Structural(StructuralError::EmptyPropertyName)
    );
}

#[test]
fn top_level_scalars_are_rejected() {
    assert_eq!(
        fail("42").kind,
        ErrorKind::Structural(StructuralError::InvalidDocumentStart("a number"))
    );
}

#[test]
fn nesting_past_the_bound_fails_with_depth_exceeded() {
    let mut text = String::new();
    for _ in 0..200 {
        text.push('[');
    }
    let mut parser = StructuralParser::with_options(text.chars(), ParseOptions { max_depth: 64 });
    let error = parser.parse().expect_err("depth bound must trip");
    assert_eq!(
        error.kind,
        ErrorKind::Structural(StructuralError::DepthExceeded(64))
    );
}
