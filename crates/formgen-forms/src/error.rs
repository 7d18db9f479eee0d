//! Schema errors

/// Errors raised while reading or checking a form schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
	/// The schema text is not well-formed JSON, or does not have the
	/// expected shape (missing keys, wrong value types, negative lengths).
	#[error("{0}")]
	Parse(#[from] serde_json::Error),
	/// Two fields share the same identifier.
	#[error("duplicate field id '{id}'")]
	DuplicateFieldId { id: String },
	/// A `select` or `radio` field has no options to choose from.
	#[error("field '{id}' of type '{kind}' requires at least one option")]
	MissingOptions { id: String, kind: String },
	/// Options were given for a field type that does not use them.
	#[error("field '{id}' of type '{kind}' does not accept options")]
	UnexpectedOptions { id: String, kind: String },
	/// The declared field type is not one of the supported kinds.
	#[error("field '{id}' has unsupported type '{kind}'")]
	UnsupportedFieldType { id: String, kind: String },
	/// `minLength` is greater than `maxLength`.
	#[error("field '{id}' has minLength {min} greater than maxLength {max}")]
	InvalidLengthBounds { id: String, min: usize, max: usize },
}

impl SchemaError {
	/// Returns `true` if the schema text itself could not be parsed.
	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse(_))
	}
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
