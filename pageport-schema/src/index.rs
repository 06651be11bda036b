//! Value-kind index derivation and memoization.

use crate::error::SchemaResult;
use crate::provider::BlockDefinitionProvider;
use pageport_model::{BlockDefinition, ValueKind};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Which attributes of which block types carry one value kind.
///
/// Derived deterministically from a [`BlockDefinition`]: block type →
/// attribute identifiers, attributes in declaration order. Unknown kinds
/// derive an empty index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueKindIndex {
    by_block_type: BTreeMap<String, Vec<String>>,
}

impl ValueKindIndex {
    /// Scans the block definition for attributes declared with `kind`.
    #[must_use]
    pub fn derive(definition: &BlockDefinition, kind: &ValueKind) -> Self {
        let mut by_block_type: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (block_type, attribute, value_type) in definition.attribute_types() {
            if value_type == kind.tag() {
                by_block_type
                    .entry(block_type.to_string())
                    .or_default()
                    .push(attribute.to_string());
            }
        }
        Self { by_block_type }
    }

    /// The attribute identifiers registered for `block_type`, in declaration
    /// order. `None` when the block type has no attributes of this kind.
    #[must_use]
    pub fn attributes_for(&self, block_type: &str) -> Option<&[String]> {
        self.by_block_type.get(block_type).map(Vec::as_slice)
    }

    /// Iterates the indexed block-type identifiers.
    pub fn block_types(&self) -> impl Iterator<Item = &str> {
        self.by_block_type.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_block_type.is_empty()
    }

    /// Number of indexed block types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_block_type.len()
    }
}

/// Memoizing index over the block-definition configuration.
///
/// Owns the provider and a per-kind cache. The configuration is immutable
/// for the process lifetime, so there is no invalidation: first request for
/// a kind scans the configuration, every later request returns the cached
/// index. Derivation is pure, so concurrent misses for the same kind may
/// both compute — the writes are idempotent and no exclusive compute lock
/// is taken.
pub struct SchemaIndex {
    provider: Arc<dyn BlockDefinitionProvider>,
    cache: RwLock<HashMap<String, Arc<ValueKindIndex>>>,
}

impl SchemaIndex {
    pub fn new(provider: Arc<dyn BlockDefinitionProvider>) -> Self {
        Self {
            provider,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// A schema index over a fixed in-memory block definition.
    #[must_use]
    pub fn from_definition(definition: BlockDefinition) -> Self {
        Self::new(Arc::new(crate::provider::StaticBlockDefinitionProvider::new(
            definition,
        )))
    }

    /// Returns the index for `kind`, deriving and caching it on first use.
    ///
    /// Fails only when the block-definition configuration cannot be read;
    /// a kind matching nothing yields an empty index.
    pub fn get(&self, kind: &ValueKind) -> SchemaResult<Arc<ValueKindIndex>> {
        if let Some(index) = self
            .cache
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(kind.tag())
        {
            return Ok(Arc::clone(index));
        }

        let definition = self.provider.configuration()?;
        let index = Arc::new(ValueKindIndex::derive(&definition, kind));
        debug!(
            kind = %kind,
            block_types = index.len(),
            "derived value-kind index"
        );

        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        // A racing thread may have inserted an identical index; keep the
        // first one so returned Arcs stay shared.
        let entry = cache
            .entry(kind.tag().to_string())
            .or_insert_with(|| Arc::clone(&index));
        Ok(Arc::clone(entry))
    }
}

impl std::fmt::Debug for SchemaIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaIndex").finish_non_exhaustive()
    }
}
