/// Declare a struct together with its [`Mapped`](crate::json::Mapped) descriptor.
///
/// Field order in the declaration is the serialization order. The struct must
/// implement `Default`, which supplies values for fields missing from the
/// input. Prefix the declaration with `uninstantiable` for types that can be
/// serialized but never built from JSON.
///
/// ```
/// use jsonmap::mapped_struct;
///
/// mapped_struct! {
/// 	#[derive(Debug, Default, PartialEq)]
/// 	pub struct Point {
/// 		pub x: i32,
/// 		pub y: i32,
/// 	}
/// }
///
/// let point: Point = jsonmap::json::deserialize(r#"{"y":2,"x":1}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// assert_eq!(jsonmap::json::serialize(&point).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
#[macro_export]
macro_rules! mapped_struct {
	(@impl $name:ident, $construct:expr, { $($field:ident : $field_ty:ty),* }) => {
		impl $crate::json::Mapped for $name {
			fn type_desc() -> &'static $crate::json::TypeDesc {
				static CELL: $crate::json::TypeDescCell = $crate::json::TypeDescCell::new();
				CELL.get_or_init(|| {
					$crate::json::TypeDesc::new::<$name>($crate::json::Kind::Object($crate::json::ObjectDesc {
						fields: ::std::vec![$($crate::mapped_struct!(@field $name, $field, $field_ty)),*],
						construct: $construct,
					}))
				})
			}
		}
	};
	(@field $name:ident, $field:ident, $field_ty:ty) => {{
		fn get(value: &dyn ::std::any::Any) -> ::std::option::Option<&dyn ::std::any::Any> {
			let this = value.downcast_ref::<$name>()?;
			::std::option::Option::Some(&this.$field as &dyn ::std::any::Any)
		}

		fn set(target: &mut dyn ::std::any::Any, item: $crate::json::AnyBox) -> bool {
			let ::std::option::Option::Some(this) = target.downcast_mut::<$name>() else {
				return false;
			};
			match item.downcast::<$field_ty>() {
				::std::result::Result::Ok(item) => {
					this.$field = *item;
					true
				}
				::std::result::Result::Err(_) => false,
			}
		}

		$crate::json::FieldDesc {
			name: ::std::stringify!($field),
			ty: <$field_ty as $crate::json::Mapped>::type_desc,
			get,
			set,
		}
	}};
	(
		uninstantiable
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$($(#[$field_meta:meta])* $field_vis:vis $field:ident : $field_ty:ty),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$($(#[$field_meta])* $field_vis $field: $field_ty,)*
		}

		$crate::mapped_struct!(@impl $name, ::std::option::Option::None, { $($field: $field_ty),* });
	};
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$($(#[$field_meta:meta])* $field_vis:vis $field:ident : $field_ty:ty),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$($(#[$field_meta])* $field_vis $field: $field_ty,)*
		}

		$crate::mapped_struct!(@impl $name, {
			fn construct() -> $crate::json::AnyBox {
				::std::boxed::Box::new(<$name as ::std::default::Default>::default())
			}
			::std::option::Option::Some(construct as fn() -> $crate::json::AnyBox)
		}, { $($field: $field_ty),* });
	};
}

/// Declare a unit-only enum mapped to and from its variant names.
///
/// ```
/// use jsonmap::mapped_enum;
///
/// mapped_enum! {
/// 	#[derive(Debug, Default, PartialEq)]
/// 	pub enum Unit {
/// 		#[default]
/// 		Metre,
/// 		Foot,
/// 	}
/// }
///
/// assert_eq!(jsonmap::json::serialize(&Unit::Foot).unwrap(), r#""Foot""#);
/// ```
#[macro_export]
macro_rules! mapped_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
		}
	) => {
		$(#[$meta])*
		$vis enum $name {
			$($(#[$variant_meta])* $variant,)+
		}

		impl $crate::json::Mapped for $name {
			fn type_desc() -> &'static $crate::json::TypeDesc {
				static CELL: $crate::json::TypeDescCell = $crate::json::TypeDescCell::new();

				fn name_of(value: &dyn ::std::any::Any) -> ::std::option::Option<&'static str> {
					match value.downcast_ref::<$name>()? {
						$($name::$variant => ::std::option::Option::Some(::std::stringify!($variant)),)+
					}
				}

				fn from_name(name: &str) -> ::std::option::Option<$crate::json::AnyBox> {
					match name {
						$(::std::stringify!($variant) => ::std::option::Option::Some(::std::boxed::Box::new($name::$variant)),)+
						_ => ::std::option::Option::None,
					}
				}

				CELL.get_or_init(|| {
					$crate::json::TypeDesc::new::<$name>($crate::json::Kind::Enum($crate::json::EnumDesc {
						variants: &[$(::std::stringify!($variant)),+],
						name_of,
						from_name,
					}))
				})
			}
		}
	};
}
