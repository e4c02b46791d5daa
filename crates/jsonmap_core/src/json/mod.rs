mod cell;
mod classify;
mod convert;
mod de;
mod desc;
mod error;
mod impls;
mod macros;
mod number;
mod parser;
mod path;
mod schema;
mod ser;
mod settings;
mod skip;
mod token;
mod value;
mod writer;

/// Lazily initialised descriptor storage used by `Mapped` impls.
pub use cell::{GenericTypeDescCell, TypeDescCell};
/// Shape classification helpers.
pub use classify::{DataType, classify, element_type, is_array_shape, is_object_shape};
/// Top-level conversion entry points.
pub use convert::{Converter, deserialize, serialize};
/// Value-model to typed-instance mapping.
pub use de::Deserializer;
/// Per-type field descriptor tables.
pub use desc::{AnyBox, ArrayDesc, BoxDesc, EnumDesc, FieldDesc, Kind, Mapped, ObjectDesc, OptionDesc, TypeDesc};
/// Error and result aliases.
pub use error::{ErrorCategory, JsonError, Result};
/// Numeric target kinds.
pub use number::NumberKind;
/// Schema-guided recursive-descent parser.
pub use parser::{Parser, parse};
/// Dotted field path parser.
pub use path::FieldPath;
/// Inclusion table construction and caching.
pub use schema::{Inclusion, InclusionTable, SchemaCache, build_inclusion_table};
/// Typed-instance to JSON text mapping.
pub use ser::Serializer;
/// Converter configuration.
pub use settings::ConverterSettings;
/// Balanced skip scan over unwanted values.
pub use skip::skip_value;
/// Single-character token classification.
pub use token::Token;
/// Parsed value model.
pub use value::{ObjectMap, Value};
/// JSON text writer.
pub use writer::{JsonWriter, write_value};
