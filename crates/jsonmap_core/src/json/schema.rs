use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, trace};

use crate::json::{FieldPath, JsonError, Kind, Result, TypeDesc, element_type, is_object_shape};

/// What the parser does with one key at one nesting path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inclusion {
	/// Keep the whole value, including every key nested inside it.
	Leaf,
	/// Parse the value with the given deeper path active.
	Nested(Box<str>),
}

static LEAF: Inclusion = Inclusion::Leaf;

/// Flat `(path, field) -> Inclusion` table guiding the parser.
///
/// Keys absent from the table are skipped without being materialized.
#[derive(Debug, Clone, Default)]
pub struct InclusionTable {
	entries: HashMap<Box<str>, HashMap<Box<str>, Inclusion>>,
	passthrough: bool,
}

impl InclusionTable {
	/// Create an empty table that skips every key.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a table that keeps every key at every depth.
	pub fn passthrough() -> Self {
		Self {
			entries: HashMap::new(),
			passthrough: true,
		}
	}

	/// Build a table keeping only the listed dotted key chains.
	///
	/// Intermediate keys become nested entries and the final key a leaf. A key
	/// listed both as a leaf and as a prefix is kept whole.
	pub fn from_field_paths<I, S>(paths: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut table = Self::new();
		for raw in paths {
			let path = FieldPath::parse(raw.as_ref())?;
			let mut current = String::new();
			let last = path.segments.len() - 1;
			for (idx, segment) in path.segments.iter().enumerate() {
				if idx == last {
					table.insert(&current, segment, Inclusion::Leaf);
					break;
				}

				let deeper = format!("{current}{segment}/");
				match table.lookup(&current, segment) {
					Some(Inclusion::Leaf) => break,
					Some(Inclusion::Nested(_)) => {}
					None => table.insert(&current, segment, Inclusion::Nested(deeper.as_str().into())),
				}
				current = deeper;
			}
		}
		Ok(table)
	}

	/// Whether every key is kept.
	pub fn is_passthrough(&self) -> bool {
		self.passthrough
	}

	/// Record the inclusion for `field` at `path`, replacing any earlier entry.
	pub fn insert(&mut self, path: &str, field: &str, inclusion: Inclusion) {
		self.entries.entry(path.into()).or_default().insert(field.into(), inclusion);
	}

	/// Look up the inclusion for `field` at `path`.
	pub fn lookup(&self, path: &str, field: &str) -> Option<&Inclusion> {
		if self.passthrough {
			return Some(&LEAF);
		}
		self.entries.get(path)?.get(field)
	}

	/// Number of `(path, field)` entries.
	pub fn len(&self) -> usize {
		self.entries.values().map(HashMap::len).sum()
	}

	/// Whether the table has no entries.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterate entries as `(path, field, inclusion)`, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Inclusion)> {
		self.entries
			.iter()
			.flat_map(|(path, fields)| fields.iter().map(move |(field, inclusion)| (&**path, &**field, inclusion)))
	}
}

/// Walk the field graph of `root` and build its inclusion table.
///
/// Array roots use their element type. Scalar roots produce an empty table.
/// Every object type reached must be constructible.
pub fn build_inclusion_table(root: &'static TypeDesc) -> Result<InclusionTable> {
	let root = element_type(root);
	let mut builder = SchemaBuilder {
		table: InclusionTable::new(),
		seen: HashMap::new(),
	};

	if !is_object_shape(root) {
		return Ok(builder.table);
	}

	ensure_constructible(root)?;
	builder.seen.insert(root.id, Box::from(""));
	builder.visit(root, "")?;
	trace!("inclusion table for {} has {} entries", root.name, builder.table.len());
	Ok(builder.table)
}

struct SchemaBuilder {
	table: InclusionTable,
	seen: HashMap<TypeId, Box<str>>,
}

impl SchemaBuilder {
	fn visit(&mut self, ty: &'static TypeDesc, path: &str) -> Result<()> {
		let Some(object) = ty.as_object() else {
			return Ok(());
		};

		for field in &object.fields {
			let element = element_type((field.ty)());

			if !is_object_shape(element) {
				self.table.insert(path, field.name, Inclusion::Leaf);
				continue;
			}

			if element.id == ty.id {
				self.table.insert(path, field.name, Inclusion::Nested(path.into()));
				continue;
			}

			if let Some(existing) = self.seen.get(&element.id) {
				trace!("{path}{}: reusing path {existing:?} for {}", field.name, element.name);
				self.table.insert(path, field.name, Inclusion::Nested(existing.clone()));
				continue;
			}

			ensure_constructible(element)?;
			let minted = format!("{path}{}/", field.name);
			trace!("{path}{}: minted path {minted:?} for {}", field.name, element.name);
			self.seen.insert(element.id, minted.as_str().into());
			self.table.insert(path, field.name, Inclusion::Nested(minted.as_str().into()));
			self.visit(element, &minted)?;
		}

		Ok(())
	}
}

fn ensure_constructible(ty: &'static TypeDesc) -> Result<()> {
	match &ty.kind {
		Kind::Object(object) if object.construct.is_none() => Err(JsonError::Uninstantiable { type_name: ty.name }),
		_ => Ok(()),
	}
}

/// Process-wide memo of inclusion tables keyed by root type.
pub struct SchemaCache(RwLock<BTreeMap<TypeId, Arc<InclusionTable>>>);

impl SchemaCache {
	/// Create an empty cache.
	pub const fn new() -> Self {
		Self(RwLock::new(BTreeMap::new()))
	}

	/// Return the cached table for `ty`, building it on first request.
	///
	/// Build failures are not cached.
	pub fn get_or_build(&self, ty: &'static TypeDesc) -> Result<Arc<InclusionTable>> {
		if let Some(table) = self.0.read().unwrap_or_else(PoisonError::into_inner).get(&ty.id) {
			return Ok(Arc::clone(table));
		}

		let built = Arc::new(build_inclusion_table(ty)?);
		debug!("built inclusion table for {} ({} entries)", ty.name, built.len());
		let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
		Ok(Arc::clone(map.entry(ty.id).or_insert(built)))
	}

	/// Number of cached tables.
	pub fn len(&self) -> usize {
		self.0.read().unwrap_or_else(PoisonError::into_inner).len()
	}

	/// Whether no table has been cached yet.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for SchemaCache {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests;
