//! Block-definition schema index for pageport.
//!
//! Derives, from the raw block-definition configuration, which attributes of
//! which block types carry a given value kind, and memoizes the result per
//! kind for the lifetime of the process (the configuration is static per
//! deployment, so re-derivation always yields the same index).

mod error;
mod index;
mod provider;

pub use error::{SchemaError, SchemaResult};
pub use index::{SchemaIndex, ValueKindIndex};
pub use provider::{BlockDefinitionProvider, StaticBlockDefinitionProvider};
