//! Error types for the conversion layer.

use pageport_schema::SchemaError;
use pageport_types::LookupError;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur during a field conversion.
///
/// There is no partial-success mode: the first error aborts the whole
/// conversion and the partially transformed tree is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Input does not have the expected shape.
    #[error("bad value type: {0}")]
    BadValueType(String),

    /// The block-definition schema could not be read.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// An id or remote id failed to resolve during substitution.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),
}
