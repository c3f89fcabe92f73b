//! Error types for layered map operations.

use thiserror::Error;

/// Structured error types for [`LayeredMap`](super::LayeredMap) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    /// No layers were supplied
    #[error("A layered map needs at least one layer")]
    NoLayers,

    /// A supplied layer has no entries
    #[error("Layer {index} is empty; every layer needs at least one entry")]
    EmptyLayer { index: usize },

    /// A supplied layer is not a mapping
    #[error("Layer {index} is not a mapping (found {actual})")]
    NotAMapping { index: usize, actual: String },

    /// The key is absent from every layer
    #[error("Key '{key}' does not exist")]
    KeyNotFound { key: String },

    /// A value under the key does not expose an ordered field list
    #[error("Value for '{key}' in layer {index} has no fields (found {actual})")]
    NotFieldEnumerable {
        key: String,
        index: usize,
        actual: String,
    },

    /// The operand of a concatenation is neither a layered map nor a mapping
    #[error("Can not add type '{actual}'")]
    UnsupportedOperand { actual: String },
}

impl LayerError {
    /// Check if this error indicates invalid layers were supplied
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            LayerError::NoLayers | LayerError::EmptyLayer { .. } | LayerError::NotAMapping { .. }
        )
    }

    /// Check if this error indicates a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, LayerError::KeyNotFound { .. })
    }

    /// Check if this error is an operand or value type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            LayerError::NotFieldEnumerable { .. } | LayerError::UnsupportedOperand { .. }
        )
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            LayerError::KeyNotFound { key } | LayerError::NotFieldEnumerable { key, .. } => {
                Some(key)
            }
            _ => None,
        }
    }
}

// Conversion from LayerError to the main Error type
impl From<LayerError> for crate::Error {
    fn from(err: LayerError) -> Self {
        crate::Error::Layered(err)
    }
}
