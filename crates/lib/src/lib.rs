//!
//! Layerstack: generated record types and layered, shadowing key-value maps.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: The dynamic value type stored in record fields and map layers.
//! * **Record types (`record::RecordType`)**: Types generated at runtime from a name and a field
//!   specification, with optional trailing defaults and a mutability switch. Instances
//!   (`record::Record`) are positional, structurally comparable and reconstructible.
//! * **Layered maps (`layered::LayeredMap`)**: An ordered stack of non-empty key-value layers.
//!   Lookups resolve to the most recently added layer that defines a key; writes go to that
//!   same layer, and deletes purge a key from every layer.

pub mod layered;
pub mod record;
pub mod value;

pub use layered::{Layer, LayeredMap};
pub use record::{FieldEnumerable, Record, RecordType};
pub use value::Value;

/// Result type used throughout the Layerstack library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Layerstack library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured record errors from the record module
    #[error(transparent)]
    Record(record::RecordError),

    /// Structured layered map errors from the layered module
    #[error(transparent)]
    Layered(layered::LayerError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Record(_) => "record",
            Error::Layered(_) => "layered",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error was raised while generating a record type.
    pub fn is_specification_error(&self) -> bool {
        match self {
            Error::Record(record_err) => record_err.is_specification_error(),
            _ => false,
        }
    }

    /// Check if this error indicates invalid layers were supplied.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Layered(layer_err) => layer_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Layered(layer_err) => layer_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a positional index out of range.
    pub fn is_index_error(&self) -> bool {
        match self {
            Error::Record(record_err) => record_err.is_index_error(),
            _ => false,
        }
    }

    /// Check if this error is a rejected attribute assignment.
    pub fn is_immutability_error(&self) -> bool {
        match self {
            Error::Record(record_err) => record_err.is_immutability_error(),
            _ => false,
        }
    }

    /// Check if this error is an operand or field mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Record(record_err) => record_err.is_type_error(),
            Error::Layered(layer_err) => layer_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is record-related.
    pub fn is_record_error(&self) -> bool {
        matches!(self, Error::Record(_))
    }

    /// Check if this error is layered-map-related.
    pub fn is_layered_error(&self) -> bool {
        matches!(self, Error::Layered(_))
    }
}
