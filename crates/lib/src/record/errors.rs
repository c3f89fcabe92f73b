//! Error types for record type generation and record instances.

use thiserror::Error;

/// Structured error types for record operations.
///
/// Specification errors are raised while a [`RecordType`](super::RecordType) is being
/// generated; the remaining variants are raised by operations on its instances.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The type name is not a valid identifier or is a reserved word
    #[error("Invalid type name '{name}': {reason}")]
    InvalidTypeName { name: String, reason: String },

    /// A field name is not a valid identifier or is a reserved word
    #[error("Invalid field name '{name}': {reason}")]
    InvalidFieldName { name: String, reason: String },

    /// The field specification produced no field names
    #[error("Field specification must name at least one field")]
    EmptyFieldSpec,

    /// A default was supplied under a key that is not a valid identifier
    #[error("Invalid default key '{key}': {reason}")]
    InvalidDefaultKey { key: String, reason: String },

    /// A default was supplied for a field that was never declared
    #[error("Default value for '{field}' does not correspond to a declared field")]
    UndeclaredDefault { field: String },

    /// A field without a default follows a field with one
    #[error("Required field '{field}' follows defaulted field '{after}'")]
    NonTrailingDefault { field: String, after: String },

    /// A required constructor argument was not supplied
    #[error("{type_name}() missing required argument '{field}'")]
    MissingArgument { type_name: String, field: String },

    /// More positional arguments than declared fields
    #[error("{type_name}() takes {expected} arguments but {actual} were given")]
    TooManyArguments {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    /// A field was bound both positionally and by name
    #[error("{type_name}() got multiple values for argument '{field}'")]
    DuplicateArgument { type_name: String, field: String },

    /// `make` received the wrong number of values
    #[error("{type_name} expected {expected} values, got {actual}")]
    ArityMismatch {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    /// Positional index outside the declared fields
    #[error("Record index {index} out of range for {len} fields")]
    IndexOutOfRange { index: usize, len: usize },

    /// A name that is not a declared field was used to address a field
    #[error("Invalid field name '{field}' for {type_name}")]
    InvalidField { type_name: String, field: String },

    /// Assignment to a field of an immutable record
    #[error("{type_name} object is immutable")]
    Immutable { type_name: String },

    /// Assignment to an attribute that is not a declared field
    #[error("{type_name} object has no field '{field}'")]
    InvalidAttribute { type_name: String, field: String },
}

impl RecordError {
    /// Check if this error was raised while generating a record type
    pub fn is_specification_error(&self) -> bool {
        matches!(
            self,
            RecordError::InvalidTypeName { .. }
                | RecordError::InvalidFieldName { .. }
                | RecordError::EmptyFieldSpec
                | RecordError::InvalidDefaultKey { .. }
                | RecordError::UndeclaredDefault { .. }
                | RecordError::NonTrailingDefault { .. }
        )
    }

    /// Check if this error is a constructor or `make` arity failure
    pub fn is_arity_error(&self) -> bool {
        matches!(
            self,
            RecordError::MissingArgument { .. }
                | RecordError::TooManyArguments { .. }
                | RecordError::DuplicateArgument { .. }
                | RecordError::ArityMismatch { .. }
        )
    }

    /// Check if this error is a positional index failure
    pub fn is_index_error(&self) -> bool {
        matches!(self, RecordError::IndexOutOfRange { .. })
    }

    /// Check if this error is a rejected assignment
    pub fn is_immutability_error(&self) -> bool {
        matches!(
            self,
            RecordError::Immutable { .. } | RecordError::InvalidAttribute { .. }
        )
    }

    /// Check if this error is a field-name or arity mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, RecordError::InvalidField { .. }) || self.is_arity_error()
    }

    /// Get the offending field name, if the error names one
    pub fn field(&self) -> Option<&str> {
        match self {
            RecordError::InvalidFieldName { name: field, .. }
            | RecordError::UndeclaredDefault { field }
            | RecordError::NonTrailingDefault { field, .. }
            | RecordError::MissingArgument { field, .. }
            | RecordError::DuplicateArgument { field, .. }
            | RecordError::InvalidField { field, .. }
            | RecordError::InvalidAttribute { field, .. } => Some(field),
            _ => None,
        }
    }
}

// Conversion from RecordError to the main Error type
impl From<RecordError> for crate::Error {
    fn from(err: RecordError) -> Self {
        crate::Error::Record(err)
    }
}
