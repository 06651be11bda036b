//! Error types for the schema layer.

use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while reading the block-definition schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The block-definition configuration could not be loaded.
    ///
    /// Distinct from "no matching attributes": an empty index is a valid
    /// answer, an unreadable schema is not.
    #[error("block-definition configuration unavailable: {0}")]
    ConfigurationUnavailable(String),
}
