use std::any::{Any, TypeId};
use std::fmt;

use crate::json::NumberKind;

/// Owned type-erased value produced while deserializing.
pub type AnyBox = Box<dyn Any>;

/// Types that carry a static descriptor the mapper can walk.
///
/// Implemented for strings, booleans, primitive numbers, `Vec<T>`,
/// `Option<T>`, and `Box<T>`; user structs and unit enums implement it through
/// [`mapped_struct!`](crate::mapped_struct) and
/// [`mapped_enum!`](crate::mapped_enum).
pub trait Mapped: Any {
	/// Return the descriptor for `Self`, built once per process.
	fn type_desc() -> &'static TypeDesc;
}

/// Descriptor for one mappable type.
pub struct TypeDesc {
	/// Rust type name, used in diagnostics.
	pub name: &'static str,
	/// Identity used for caching and de-duplication.
	pub id: TypeId,
	/// Shape-specific metadata.
	pub kind: Kind,
}

impl TypeDesc {
	/// Create a descriptor for `T`.
	pub fn new<T: Any>(kind: Kind) -> Self {
		Self {
			name: std::any::type_name::<T>(),
			id: TypeId::of::<T>(),
			kind,
		}
	}

	/// Strip `Option` and `Box` wrappers.
	pub fn resolve(&'static self) -> &'static TypeDesc {
		let mut ty = self;
		loop {
			match &ty.kind {
				Kind::Optional(inner) => ty = (inner.inner)(),
				Kind::Boxed(inner) => ty = (inner.inner)(),
				_ => return ty,
			}
		}
	}

	/// Object metadata, if this is an object type.
	pub fn as_object(&self) -> Option<&ObjectDesc> {
		match &self.kind {
			Kind::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Array metadata, if this is a sequence type.
	pub fn as_array(&self) -> Option<&ArrayDesc> {
		match &self.kind {
			Kind::Array(array) => Some(array),
			_ => None,
		}
	}

	/// Enum metadata, if this is a unit enum.
	pub fn as_enum(&self) -> Option<&EnumDesc> {
		match &self.kind {
			Kind::Enum(item) => Some(item),
			_ => None,
		}
	}

	/// Numeric kind, if this is a number type.
	pub fn number_kind(&self) -> Option<NumberKind> {
		match self.kind {
			Kind::Number(kind) => Some(kind),
			_ => None,
		}
	}

	/// Whether `null` is a representable value for this type.
	pub fn is_nullable(&self) -> bool {
		matches!(self.kind, Kind::Optional(_))
	}
}

impl fmt::Debug for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDesc").field("name", &self.name).field("kind", &self.kind).finish()
	}
}

/// Shape of a mappable type.
pub enum Kind {
	/// `String`.
	String,
	/// Primitive integer or float.
	Number(NumberKind),
	/// `bool`.
	Boolean,
	/// Unit-only enum mapped through variant names.
	Enum(EnumDesc),
	/// Homogeneous sequence.
	Array(ArrayDesc),
	/// Record with named fields.
	Object(ObjectDesc),
	/// `Option<T>`; `None` maps to `null`.
	Optional(OptionDesc),
	/// `Box<T>`; transparent indirection.
	Boxed(BoxDesc),
}

impl Kind {
	/// Stable label for the shape.
	pub fn label(&self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Number(_) => "number",
			Self::Boolean => "boolean",
			Self::Enum(_) => "enum",
			Self::Array(_) => "array",
			Self::Object(_) => "object",
			Self::Optional(_) => "optional",
			Self::Boxed(_) => "boxed",
		}
	}
}

impl fmt::Debug for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(kind) => write!(f, "Number({})", kind.type_name()),
			Self::Object(object) => f.debug_list().entries(object.fields.iter().map(|field| field.name)).finish(),
			other => f.write_str(other.label()),
		}
	}
}

/// One named field of an object type.
pub struct FieldDesc {
	/// Field name as it appears in JSON.
	pub name: &'static str,
	/// Field type descriptor, resolved on first use.
	pub ty: fn() -> &'static TypeDesc,
	/// Borrow the field from an instance of the declaring type.
	pub get: fn(&dyn Any) -> Option<&dyn Any>,
	/// Move a value of the field type into an instance; `false` on type mismatch.
	pub set: fn(&mut dyn Any, AnyBox) -> bool,
}

/// Field table of an object type, in declaration order.
pub struct ObjectDesc {
	/// Fields in declaration order.
	pub fields: Vec<FieldDesc>,
	/// Default-instance constructor; `None` for types that cannot be built.
	pub construct: Option<fn() -> AnyBox>,
}

impl ObjectDesc {
	/// Look up a field by name.
	pub fn field(&self, name: &str) -> Option<&FieldDesc> {
		self.fields.iter().find(|field| field.name == name)
	}
}

/// Element access for a sequence type.
pub struct ArrayDesc {
	/// Element type descriptor.
	pub element: fn() -> &'static TypeDesc,
	/// Number of elements.
	pub len: fn(&dyn Any) -> Option<usize>,
	/// Borrow one element.
	pub get: fn(&dyn Any, usize) -> Option<&dyn Any>,
	/// Create an empty sequence with the given capacity.
	pub new: fn(usize) -> AnyBox,
	/// Append an element; `false` on type mismatch.
	pub push: fn(&mut dyn Any, AnyBox) -> bool,
}

impl ArrayDesc {
	/// Descriptor functions for `Vec<T>`.
	pub fn of_vec<T: Mapped>() -> Self {
		Self {
			element: T::type_desc,
			len: vec_len::<T>,
			get: vec_get::<T>,
			new: vec_new::<T>,
			push: vec_push::<T>,
		}
	}
}

fn vec_len<T: Mapped>(value: &dyn Any) -> Option<usize> {
	value.downcast_ref::<Vec<T>>().map(Vec::len)
}

fn vec_get<T: Mapped>(value: &dyn Any, index: usize) -> Option<&dyn Any> {
	let item = value.downcast_ref::<Vec<T>>()?.get(index)?;
	Some(item as &dyn Any)
}

fn vec_new<T: Mapped>(capacity: usize) -> AnyBox {
	Box::new(Vec::<T>::with_capacity(capacity))
}

fn vec_push<T: Mapped>(target: &mut dyn Any, item: AnyBox) -> bool {
	let Some(items) = target.downcast_mut::<Vec<T>>() else {
		return false;
	};
	match item.downcast::<T>() {
		Ok(item) => {
			items.push(*item);
			true
		}
		Err(_) => false,
	}
}

/// Variant table of a unit enum.
pub struct EnumDesc {
	/// Variant names in declaration order.
	pub variants: &'static [&'static str],
	/// Name of the variant held by an instance.
	pub name_of: fn(&dyn Any) -> Option<&'static str>,
	/// Build the variant with the given name.
	pub from_name: fn(&str) -> Option<AnyBox>,
}

/// Access to the inner value of `Option<T>`.
pub struct OptionDesc {
	/// Inner type descriptor.
	pub inner: fn() -> &'static TypeDesc,
	/// Borrow the inner value; `None` for the `None` variant.
	pub get: fn(&dyn Any) -> Option<&dyn Any>,
	/// Wrap an inner value into `Some`; `None` on type mismatch.
	pub some: fn(AnyBox) -> Option<AnyBox>,
	/// Build the `None` variant.
	pub none: fn() -> AnyBox,
}

impl OptionDesc {
	/// Descriptor functions for `Option<T>`.
	pub fn of<T: Mapped>() -> Self {
		Self {
			inner: T::type_desc,
			get: option_get::<T>,
			some: option_some::<T>,
			none: option_none::<T>,
		}
	}
}

fn option_get<T: Mapped>(value: &dyn Any) -> Option<&dyn Any> {
	let inner = value.downcast_ref::<Option<T>>()?.as_ref()?;
	Some(inner as &dyn Any)
}

fn option_some<T: Mapped>(item: AnyBox) -> Option<AnyBox> {
	let item = item.downcast::<T>().ok()?;
	Some(Box::new(Some(*item)))
}

fn option_none<T: Mapped>() -> AnyBox {
	Box::new(None::<T>)
}

/// Access to the pointee of `Box<T>`.
pub struct BoxDesc {
	/// Pointee type descriptor.
	pub inner: fn() -> &'static TypeDesc,
	/// Borrow the pointee.
	pub get: fn(&dyn Any) -> Option<&dyn Any>,
	/// Box an owned pointee; `None` on type mismatch.
	pub wrap: fn(AnyBox) -> Option<AnyBox>,
}

impl BoxDesc {
	/// Descriptor functions for `Box<T>`.
	pub fn of<T: Mapped>() -> Self {
		Self {
			inner: T::type_desc,
			get: box_get::<T>,
			wrap: box_wrap::<T>,
		}
	}
}

fn box_get<T: Mapped>(value: &dyn Any) -> Option<&dyn Any> {
	let inner: &T = value.downcast_ref::<Box<T>>()?;
	Some(inner as &dyn Any)
}

fn box_wrap<T: Mapped>(item: AnyBox) -> Option<AnyBox> {
	let item = item.downcast::<T>().ok()?;
	Some(Box::new(item))
}
