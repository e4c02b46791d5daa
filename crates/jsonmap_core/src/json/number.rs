use std::any::Any;

use crate::json::{AnyBox, JsonError, Result};

macro_rules! number_kinds {
	($($variant:ident => $ty:ty),* $(,)?) => {
		/// Concrete numeric type receiving a JSON number.
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		pub enum NumberKind {
			$(
				#[doc = concat!("`", stringify!($ty), "`")]
				$variant,
			)*
		}

		impl NumberKind {
			/// Rust name of the numeric type.
			pub fn type_name(self) -> &'static str {
				match self {
					$(Self::$variant => stringify!($ty),)*
				}
			}

			/// Parse number text with the type's `FromStr` rule.
			pub fn parse(self, text: &str) -> Result<AnyBox> {
				let text = text.trim();
				match self {
					$(Self::$variant => text
						.parse::<$ty>()
						.map(|value| Box::new(value) as AnyBox)
						.map_err(|_| JsonError::InvalidNumber {
							text: text.to_owned(),
							target: stringify!($ty),
						}),)*
				}
			}

			/// Render a value of this kind as JSON number text.
			pub fn format(self, value: &dyn Any) -> Result<String> {
				let mismatch = || JsonError::DescriptorMismatch { type_name: self.type_name() };
				match self {
					$(Self::$variant => {
						let value = value.downcast_ref::<$ty>().ok_or_else(mismatch)?;
						format_finite(*value, self.type_name())
					})*
				}
			}
		}
	};
}

number_kinds! {
	I8 => i8,
	I16 => i16,
	I32 => i32,
	I64 => i64,
	I128 => i128,
	Isize => isize,
	U8 => u8,
	U16 => u16,
	U32 => u32,
	U64 => u64,
	U128 => u128,
	Usize => usize,
	F32 => f32,
	F64 => f64,
}

impl NumberKind {
	/// Whether the kind is a floating-point type.
	pub fn is_float(self) -> bool {
		matches!(self, Self::F32 | Self::F64)
	}
}

trait FiniteCheck: std::fmt::Display {
	fn is_finite_number(&self) -> bool {
		true
	}
}

macro_rules! integer_finite {
	($($ty:ty),*) => {
		$(impl FiniteCheck for $ty {})*
	};
}

integer_finite!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FiniteCheck for f32 {
	fn is_finite_number(&self) -> bool {
		self.is_finite()
	}
}

impl FiniteCheck for f64 {
	fn is_finite_number(&self) -> bool {
		self.is_finite()
	}
}

fn format_finite<T: FiniteCheck>(value: T, type_name: &'static str) -> Result<String> {
	if !value.is_finite_number() {
		return Err(JsonError::NonFiniteNumber { type_name });
	}
	Ok(value.to_string())
}

#[cfg(test)]
mod tests {
	use super::NumberKind;
	use crate::json::JsonError;

	#[test]
	fn parses_with_target_rules() {
		let value = NumberKind::I16.parse(" -300 ").expect("fits i16");
		assert_eq!(value.downcast_ref::<i16>(), Some(&-300));

		let value = NumberKind::F32.parse("1e3").expect("valid float");
		assert_eq!(value.downcast_ref::<f32>(), Some(&1000.0));
	}

	#[test]
	fn rejects_out_of_range_and_fractional_integers() {
		let err = NumberKind::U8.parse("256").expect_err("256 does not fit u8");
		assert!(matches!(err, JsonError::InvalidNumber { target: "u8", .. }));

		let err = NumberKind::I32.parse("1.5").expect_err("fraction is not i32");
		assert!(matches!(err, JsonError::InvalidNumber { target: "i32", .. }));
	}

	#[test]
	fn formats_finite_values_only() {
		assert_eq!(NumberKind::U64.format(&u64::MAX).expect("u64 formats"), "18446744073709551615");
		assert_eq!(NumberKind::F64.format(&0.25_f64).expect("f64 formats"), "0.25");
		assert!(matches!(
			NumberKind::F32.format(&f32::INFINITY),
			Err(JsonError::NonFiniteNumber { type_name: "f32" })
		));
		assert!(matches!(
			NumberKind::I8.format(&1_u8),
			Err(JsonError::DescriptorMismatch { type_name: "i8" })
		));
		assert!(NumberKind::F64.is_float());
	}
}
