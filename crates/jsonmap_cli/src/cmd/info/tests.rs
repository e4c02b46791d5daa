use jsonmap::json::{InclusionTable, parse};

use crate::cmd::info::ValueStats;

#[test]
fn counts_every_value_kind() {
	let value = parse(r#"{"a": [1, "x", null, true], "b": {"c": {}}}"#, &InclusionTable::passthrough()).expect("document parses");
	let stats = ValueStats::collect(&value);

	assert_eq!(stats.counts.number, 1);
	assert_eq!(stats.counts.string, 1);
	assert_eq!(stats.counts.null, 1);
	assert_eq!(stats.counts.boolean, 1);
	assert_eq!(stats.counts.array, 1);
	assert_eq!(stats.counts.object, 3);
	assert_eq!(stats.object_keys, 3);
	assert_eq!(stats.max_depth, 3);
}

#[test]
fn scalar_root_has_depth_one() {
	let value = parse("42", &InclusionTable::passthrough()).expect("document parses");
	let stats = ValueStats::collect(&value);
	assert_eq!(stats.max_depth, 1);
	assert_eq!(stats.counts.number, 1);
}
