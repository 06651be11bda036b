//! Block-definition provider abstraction.
//!
//! The CMS owns the block-definition configuration; the schema index only
//! needs a way to read it once. Implementations typically wrap the CMS's
//! own definition factory.

use crate::error::SchemaResult;
use pageport_model::BlockDefinition;

/// Read-only access to the block-definition configuration.
///
/// Called at most once per value kind by the schema index (results are
/// memoized). A failure must surface as
/// [`SchemaError::ConfigurationUnavailable`](crate::SchemaError::ConfigurationUnavailable),
/// never as an empty configuration.
pub trait BlockDefinitionProvider: Send + Sync {
    /// Returns the full block-definition configuration.
    fn configuration(&self) -> SchemaResult<BlockDefinition>;
}

/// A provider backed by an in-memory configuration.
///
/// The common case for deployments where the configuration is parsed from a
/// file at startup, and the test double everywhere else.
#[derive(Debug, Clone)]
pub struct StaticBlockDefinitionProvider {
    definition: BlockDefinition,
}

impl StaticBlockDefinitionProvider {
    #[must_use]
    pub fn new(definition: BlockDefinition) -> Self {
        Self { definition }
    }
}

impl BlockDefinitionProvider for StaticBlockDefinitionProvider {
    fn configuration(&self) -> SchemaResult<BlockDefinition> {
        Ok(self.definition.clone())
    }
}
