use crate::json::{JsonError, skip_value};

fn skip(input: &str) -> usize {
	skip_value(input.as_bytes(), 0).expect("skip succeeds")
}

#[test]
fn scalar_stops_at_comma() {
	assert_eq!(skip(": 123, \"next\": 1"), 5);
	assert_eq!(skip(":true}"), 5);
}

#[test]
fn nested_array_is_one_unit() {
	let input = r#":[1,{"z":[1,2]},3],"known2":2"#;
	let end = skip(input);
	assert_eq!(&input[end..], r#","known2":2"#);
}

#[test]
fn brackets_inside_strings_are_ignored() {
	let input = r#":{"a":"}]{[","b":[1]} ,"x":0"#;
	let end = skip(input);
	assert_eq!(&input[end..], r#","x":0"#);
}

#[test]
fn escaped_quote_does_not_close_string() {
	let input = r#":"say \"hi\", ok"}"#;
	let end = skip(input);
	assert_eq!(&input[end..], "}");
}

#[test]
fn escaped_backslash_before_quote_closes_string() {
	let input = r#":"dir\\",1"#;
	let end = skip(input);
	assert_eq!(&input[end..], ",1");
}

#[test]
fn value_at_end_of_input_is_accepted() {
	assert_eq!(skip(":[1,2]"), 6);
}

#[test]
fn starts_mid_buffer() {
	let input = r#"{"a":{"b":1},"c":2}"#;
	let end = skip_value(input.as_bytes(), 4).expect("skip succeeds");
	assert_eq!(&input[end..], r#","c":2}"#);
}

#[test]
fn unterminated_nesting_reports_opener() {
	let err = skip_value(br#":{"a":[1,2"#, 0).expect_err("unbalanced input should fail");
	assert!(matches!(err, JsonError::UnterminatedArray { at: 6 }));

	let err = skip_value(br#":{"a":1"#, 0).expect_err("unbalanced input should fail");
	assert!(matches!(err, JsonError::UnterminatedObject { at: 1 }));
}

#[test]
fn unterminated_string_reports_quote() {
	let err = skip_value(br#": "open"#, 0).expect_err("open string should fail");
	assert!(matches!(err, JsonError::UnterminatedString { at: 2 }));
}

#[test]
fn mismatched_closer_is_rejected() {
	let err = skip_value(b":{]", 0).expect_err("mismatched bracket should fail");
	assert!(matches!(err, JsonError::UnexpectedToken { at: 2, found: ']', .. }));
}
