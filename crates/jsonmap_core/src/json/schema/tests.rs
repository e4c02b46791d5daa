use std::sync::Arc;

use crate::json::{Inclusion, InclusionTable, JsonError, Mapped, SchemaCache, build_inclusion_table};
use crate::mapped_struct;

mapped_struct! {
	#[derive(Debug, Default)]
	struct Address {
		street: String,
		city: String,
	}
}

mapped_struct! {
	#[derive(Debug, Default)]
	struct Person {
		name: String,
		age: u32,
		home: Address,
		work: Option<Address>,
		tags: Vec<String>,
	}
}

mapped_struct! {
	#[derive(Debug, Default)]
	struct Pet {
		name: String,
		kind: String,
	}
}

mapped_struct! {
	#[derive(Debug, Default)]
	struct Owner {
		name: String,
		pet: Pet,
	}
}

mapped_struct! {
	#[derive(Debug, Default)]
	struct Node {
		value: i32,
		children: Vec<Node>,
		next: Option<Box<Node>>,
	}
}

mapped_struct! {
	#[derive(Debug, Default)]
	struct Tree {
		root: Branch,
	}
}

mapped_struct! {
	#[derive(Debug, Default)]
	struct Branch {
		leaves: Vec<Branch>,
		owner: Option<Box<Tree>>,
	}
}

mapped_struct! {
	uninstantiable
	#[derive(Debug)]
	struct Sealed {
		id: u8,
	}
}

mapped_struct! {
	#[derive(Debug, Default)]
	struct Holder {
		label: String,
		sealed: Vec<Option<Sealed>>,
	}
}

fn nested(path: &str) -> Inclusion {
	Inclusion::Nested(path.into())
}

#[test]
fn table_lists_only_reachable_fields() {
	let table = build_inclusion_table(Person::type_desc()).expect("schema builds");

	assert_eq!(table.len(), 7);
	assert_eq!(table.lookup("", "name"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("", "age"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("", "tags"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("", "home"), Some(&nested("home/")));
	assert_eq!(table.lookup("home/", "city"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("", "unknown"), None);
	assert_eq!(table.lookup("home/", "name"), None);
}

#[test]
fn repeated_type_reuses_first_path() {
	let table = build_inclusion_table(Person::type_desc()).expect("schema builds");
	assert_eq!(table.lookup("", "work"), Some(&nested("home/")));
	assert_eq!(table.lookup("work/", "city"), None);
}

#[test]
fn same_field_name_is_disambiguated_by_path() {
	let table = build_inclusion_table(Owner::type_desc()).expect("schema builds");

	assert_eq!(table.lookup("", "name"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("pet/", "name"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("pet/", "kind"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("", "kind"), None);
}

#[test]
fn self_reference_keeps_declaring_path() {
	let table = build_inclusion_table(Node::type_desc()).expect("schema builds");

	assert_eq!(table.len(), 3);
	assert_eq!(table.lookup("", "children"), Some(&nested("")));
	assert_eq!(table.lookup("", "next"), Some(&nested("")));
}

#[test]
fn indirect_cycle_terminates() {
	let table = build_inclusion_table(Tree::type_desc()).expect("schema builds");

	assert_eq!(table.lookup("", "root"), Some(&nested("root/")));
	assert_eq!(table.lookup("root/", "leaves"), Some(&nested("root/")));
	assert_eq!(table.lookup("root/", "owner"), Some(&nested("")));
	assert_eq!(table.len(), 3);
}

#[test]
fn array_root_uses_element_schema() {
	let table = build_inclusion_table(<Vec<Vec<Owner>>>::type_desc()).expect("schema builds");
	assert_eq!(table.lookup("pet/", "kind"), Some(&Inclusion::Leaf));
}

#[test]
fn scalar_root_has_empty_table() {
	let table = build_inclusion_table(i32::type_desc()).expect("schema builds");
	assert!(table.is_empty());
	assert!(!table.is_passthrough());
}

#[test]
fn uninstantiable_field_type_is_rejected() {
	let err = build_inclusion_table(Holder::type_desc()).expect_err("sealed type cannot be built");
	assert!(matches!(err, JsonError::Uninstantiable { type_name } if type_name.ends_with("Sealed")));
}

#[test]
fn field_paths_build_nested_entries() {
	let table = InclusionTable::from_field_paths(["id", "owner.name", "owner.pet.kind"]).expect("paths parse");

	assert_eq!(table.lookup("", "id"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("", "owner"), Some(&nested("owner/")));
	assert_eq!(table.lookup("owner/", "name"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("owner/", "pet"), Some(&nested("owner/pet/")));
	assert_eq!(table.lookup("owner/pet/", "kind"), Some(&Inclusion::Leaf));
	assert_eq!(table.len(), 5);
}

#[test]
fn leaf_path_wins_over_prefix() {
	let table = InclusionTable::from_field_paths(["a.b", "a"]).expect("paths parse");
	assert_eq!(table.lookup("", "a"), Some(&Inclusion::Leaf));

	let table = InclusionTable::from_field_paths(["a", "a.b"]).expect("paths parse");
	assert_eq!(table.lookup("", "a"), Some(&Inclusion::Leaf));
	assert_eq!(table.lookup("a/", "b"), None);
}

#[test]
fn invalid_field_path_is_rejected() {
	let err = InclusionTable::from_field_paths(["a..b"]).expect_err("empty segment should fail");
	assert!(matches!(err, JsonError::InvalidFieldPath { .. }));
}

#[test]
fn passthrough_keeps_everything() {
	let table = InclusionTable::passthrough();
	assert_eq!(table.lookup("any/", "key"), Some(&Inclusion::Leaf));
}

#[test]
fn cache_returns_shared_table() {
	let cache = SchemaCache::new();
	let first = cache.get_or_build(Person::type_desc()).expect("schema builds");
	let second = cache.get_or_build(Person::type_desc()).expect("schema builds");

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(cache.len(), 1);
}

#[test]
fn cache_does_not_keep_failures() {
	let cache = SchemaCache::new();
	assert!(cache.get_or_build(Holder::type_desc()).is_err());
	assert!(cache.is_empty());
}
