use crate::json::{ArrayDesc, BoxDesc, GenericTypeDescCell, Kind, Mapped, NumberKind, OptionDesc, TypeDesc, TypeDescCell};

impl Mapped for String {
	fn type_desc() -> &'static TypeDesc {
		static CELL: TypeDescCell = TypeDescCell::new();
		CELL.get_or_init(|| TypeDesc::new::<String>(Kind::String))
	}
}

impl Mapped for bool {
	fn type_desc() -> &'static TypeDesc {
		static CELL: TypeDescCell = TypeDescCell::new();
		CELL.get_or_init(|| TypeDesc::new::<bool>(Kind::Boolean))
	}
}

macro_rules! impl_number {
	($($ty:ty => $kind:ident),* $(,)?) => {
		$(
			impl Mapped for $ty {
				fn type_desc() -> &'static TypeDesc {
					static CELL: TypeDescCell = TypeDescCell::new();
					CELL.get_or_init(|| TypeDesc::new::<$ty>(Kind::Number(NumberKind::$kind)))
				}
			}
		)*
	};
}

impl_number! {
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	i128 => I128,
	isize => Isize,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	u128 => U128,
	usize => Usize,
	f32 => F32,
	f64 => F64,
}

impl<T: Mapped> Mapped for Vec<T> {
	fn type_desc() -> &'static TypeDesc {
		static CELL: GenericTypeDescCell = GenericTypeDescCell::new();
		CELL.get_or_insert::<Self>(|| TypeDesc::new::<Self>(Kind::Array(ArrayDesc::of_vec::<T>())))
	}
}

impl<T: Mapped> Mapped for Option<T> {
	fn type_desc() -> &'static TypeDesc {
		static CELL: GenericTypeDescCell = GenericTypeDescCell::new();
		CELL.get_or_insert::<Self>(|| TypeDesc::new::<Self>(Kind::Optional(OptionDesc::of::<T>())))
	}
}

impl<T: Mapped> Mapped for Box<T> {
	fn type_desc() -> &'static TypeDesc {
		static CELL: GenericTypeDescCell = GenericTypeDescCell::new();
		CELL.get_or_insert::<Self>(|| TypeDesc::new::<Self>(Kind::Boxed(BoxDesc::of::<T>())))
	}
}
