use crate::json::{ConverterSettings, Deserializer, InclusionTable, JsonError, Value, parse};
use crate::{mapped_enum, mapped_struct};

mapped_enum! {
	#[derive(Debug, Default, Clone, Copy, PartialEq)]
	enum Level {
		#[default]
		Low,
		High,
	}
}

mapped_struct! {
	#[derive(Debug, Default, PartialEq)]
	struct Reading {
		sensor: String,
		value: f32,
		count: u8,
		ok: bool,
		level: Level,
		note: Option<String>,
		samples: Vec<i64>,
	}
}

mapped_struct! {
	uninstantiable
	#[derive(Debug)]
	struct Frozen {
		id: u8,
	}
}

fn tree(text: &str) -> Value {
	parse(text, &InclusionTable::passthrough()).expect("document parses")
}

fn read(text: &str) -> Result<Reading, JsonError> {
	Deserializer::new(&ConverterSettings::default()).read(&tree(text))
}

#[test]
fn maps_every_field_kind() {
	let reading = read(
		r#"{"sensor": "t1", "value": 2.5, "count": 3, "ok": true, "level": "High", "note": "warm", "samples": [1, -2]}"#,
	)
	.expect("reading maps");

	assert_eq!(
		reading,
		Reading {
			sensor: "t1".into(),
			value: 2.5,
			count: 3,
			ok: true,
			level: Level::High,
			note: Some("warm".into()),
			samples: vec![1, -2],
		}
	);
}

#[test]
fn missing_and_null_fields_keep_defaults() {
	let reading = read(r#"{"sensor": null, "note": null}"#).expect("reading maps");
	assert_eq!(reading, Reading::default());
}

#[test]
fn numbers_and_strings_convert_between_text_forms() {
	let reading = read(r#"{"sensor": 12, "count": "9"}"#).expect("reading maps");
	assert_eq!(reading.sensor, "12");
	assert_eq!(reading.count, 9);
}

#[test]
fn null_elements_are_dropped() {
	let reading = read(r#"{"samples": [1, null, 2, null]}"#).expect("reading maps");
	assert_eq!(reading.samples, vec![1, 2]);
}

#[test]
fn out_of_range_number_is_a_conversion_error() {
	let err = read(r#"{"count": 300}"#).expect_err("300 does not fit u8");
	assert!(matches!(&err, JsonError::InvalidNumber { text, target: "u8" } if text == "300"));
}

#[test]
fn shape_mismatch_is_reported() {
	let err = read(r#"{"ok": "yes"}"#).expect_err("string is not boolean");
	assert!(matches!(
		err,
		JsonError::TypeMismatch {
			expected: "boolean",
			got: "string",
			..
		}
	));

	let err = read(r#"[1]"#).expect_err("array is not an object");
	assert!(matches!(err, JsonError::TypeMismatch { expected: "object", .. }));
}

#[test]
fn unknown_variant_is_reported() {
	let err = read(r#"{"level": "Medium"}"#).expect_err("no such variant");
	assert!(matches!(&err, JsonError::UnknownVariant { name, .. } if name == "Medium"));
}

#[test]
fn lenient_settings_keep_defaults_on_conversion_errors() {
	let settings = ConverterSettings::lenient();
	let reading: Reading = Deserializer::new(&settings)
		.read(&tree(r#"{"sensor": "s", "count": -1, "level": "Medium"}"#))
		.expect("lenient mapping succeeds");

	assert_eq!(reading.sensor, "s");
	assert_eq!(reading.count, 0);
	assert_eq!(reading.level, Level::Low);
}

#[test]
fn uninstantiable_type_is_rejected() {
	let err = Deserializer::new(&ConverterSettings::default())
		.read::<Frozen>(&tree(r#"{"id": 1}"#))
		.expect_err("frozen cannot be built");
	assert!(matches!(err, JsonError::Uninstantiable { .. }));
}

#[test]
fn nested_sequences_map_element_by_element() {
	let values: Vec<Vec<u32>> = Deserializer::new(&ConverterSettings::default())
		.read(&tree("[[1,2],[3]]"))
		.expect("nested arrays map");
	assert_eq!(values, vec![vec![1, 2], vec![3]]);
}
