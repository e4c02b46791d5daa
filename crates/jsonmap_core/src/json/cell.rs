//! Static storage for type descriptors.
//!
//! Non-generic types keep their descriptor in a [`TypeDescCell`], a plain
//! [`OnceLock`]. A `static` inside a generic function is shared by every
//! instantiation, so generic types use a [`GenericTypeDescCell`] that keys
//! descriptors by [`TypeId`] behind an [`RwLock`].

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::json::TypeDesc;

/// Descriptor storage for one non-generic type.
pub struct TypeDescCell(OnceLock<TypeDesc>);

impl TypeDescCell {
	/// Create an empty cell.
	pub const fn new() -> Self {
		Self(OnceLock::new())
	}

	/// Return the stored descriptor, building it on first access.
	pub fn get_or_init(&self, f: impl FnOnce() -> TypeDesc) -> &TypeDesc {
		self.0.get_or_init(f)
	}
}

impl Default for TypeDescCell {
	fn default() -> Self {
		Self::new()
	}
}

/// Descriptor storage shared by all instantiations of a generic type.
///
/// Entries are leaked once per concrete type and never removed.
pub struct GenericTypeDescCell(RwLock<BTreeMap<TypeId, &'static TypeDesc>>);

impl GenericTypeDescCell {
	/// Create an empty cell.
	pub const fn new() -> Self {
		Self(RwLock::new(BTreeMap::new()))
	}

	/// Return the descriptor for `G`, building it on first access.
	///
	/// `f` runs without the lock held, so it may resolve other descriptors.
	pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeDesc) -> &'static TypeDesc {
		let type_id = TypeId::of::<G>();
		if let Some(desc) = self.get_by_type_id(type_id) {
			return desc;
		}

		let built = f();
		let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
		*map.entry(type_id).or_insert_with(|| Box::leak(Box::new(built)))
	}

	fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeDesc> {
		self.0.read().unwrap_or_else(PoisonError::into_inner).get(&type_id).copied()
	}
}

impl Default for GenericTypeDescCell {
	fn default() -> Self {
		Self::new()
	}
}
