//! Schema-filtered JSON parsing and type-directed mapping between JSON text and typed values.

/// Value model, type descriptors, schema-guided parser, and object mapper.
pub mod json;
