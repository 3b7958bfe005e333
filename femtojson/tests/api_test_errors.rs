// Error positions and formatting

use femtojson::{parse, ErrKind, ParseError, SliceParser, Value};

fn expect_err(input: &str) -> ParseError {
    match parse(input) {
        Err(e) => e,
        Ok(v) => panic!("Expected error for {:?}, got: {:?}", input, v),
    }
}

#[test]
fn test_expect_value_points_at_end() {
    let err = expect_err("   ");
    assert_eq!(err.kind(), ErrKind::ExpectValue);
    assert_eq!(err.position(), 3);
    assert_eq!(err.character(), 0);
}

#[test]
fn test_invalid_literal_points_at_literal_start() {
    let err = expect_err("  fals");
    assert_eq!(err.kind(), ErrKind::InvalidValue);
    assert_eq!(err.position(), 2);
    assert_eq!(err.character(), b'f');
}

#[test]
fn test_invalid_number_points_at_token_start() {
    let err = expect_err(" -1.e3");
    assert_eq!(err.kind(), ErrKind::InvalidValue);
    assert_eq!(err.position(), 1);
    assert_eq!(err.character(), b'-');
}

#[test]
fn test_number_too_big_points_at_token_start() {
    let err = expect_err("\n1e999");
    assert_eq!(err.kind(), ErrKind::NumberTooBig);
    assert_eq!(err.position(), 1);
    assert_eq!(err.character(), b'1');
}

#[test]
fn test_root_not_singular_points_at_trailing_content() {
    let err = expect_err("true  ,");
    assert_eq!(err.kind(), ErrKind::RootNotSingular);
    assert_eq!(err.position(), 6);
    assert_eq!(err.character(), b',');
}

#[test]
fn test_cursor_does_not_move_on_value_failure() {
    let mut value = Value::Null;
    let mut parser = SliceParser::new("  tru");
    assert!(parser.parse_into(&mut value).is_err());
    assert_eq!(parser.position(), 2);

    let mut parser = SliceParser::new(" 1e400");
    assert!(parser.parse_into(&mut value).is_err());
    assert_eq!(parser.position(), 1);
}

#[test]
fn test_error_display() {
    assert_eq!(expect_err("").to_string(), "expected a value at offset 0");
    assert_eq!(
        expect_err("nul").to_string(),
        "invalid value at offset 0 ('n')"
    );
    assert_eq!(
        expect_err("0 1").to_string(),
        "unexpected content after root value at offset 2 ('1')"
    );
    assert_eq!(
        expect_err("1e400").to_string(),
        "number too big at offset 0 ('1')"
    );
}

#[test]
fn test_error_debug() {
    assert_eq!(format!("{:?}", expect_err("x")), "InvalidValue(x) at 0");
    assert_eq!(format!("{:?}", expect_err("\t")), "ExpectValue(\\x00) at 1");
}

#[test]
#[should_panic(expected = "get_number called on a Null value")]
fn test_get_number_on_failed_parse_panics() {
    let mut value = Value::Number(1.0);
    let _ = femtojson::parse_into(&mut value, b"oops");
    value.get_number();
}
