//! The conversion entry points.

use crate::codec::LayoutCodec;
use crate::error::{ConvertError, ConvertResult};
use crate::lookup::{ContentLookup, LocationLookup};
use crate::substitution::{
    content_id_to_remote_id, content_remote_id_or_id_to_id, is_empty_value,
    location_id_list_to_remote_ids, location_remote_ids_to_id_list,
};
use pageport_model::{LayoutValue, ValueKind};
use pageport_schema::SchemaIndex;
use pageport_transform::transform_attributes;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Converts a page-layout field between its live value and the portable
/// hash stored in migration definitions.
///
/// All collaborators are required at construction; there is no degraded
/// mode. Both directions chain the tree walk in a fixed order — embed
/// first, then location list — so the two directions visit attributes in
/// the same order.
pub struct LayoutConverter {
    schema: Arc<SchemaIndex>,
    contents: Arc<dyn ContentLookup>,
    locations: Arc<dyn LocationLookup>,
    codec: Arc<dyn LayoutCodec>,
}

impl LayoutConverter {
    pub fn new(
        schema: Arc<SchemaIndex>,
        contents: Arc<dyn ContentLookup>,
        locations: Arc<dyn LocationLookup>,
        codec: Arc<dyn LayoutCodec>,
    ) -> Self {
        Self {
            schema,
            contents,
            locations,
            codec,
        }
    }

    /// Converts the live field value into a portable hash: numeric content
    /// ids become remote ids, location id lists become remote-id arrays.
    pub fn field_value_to_hash(&self, value: &LayoutValue) -> ConvertResult<Value> {
        let mut hash = self.codec.to_hash(value)?;

        let embed = self.schema.get(&ValueKind::Embed)?;
        transform_attributes(&mut hash, &embed, |v| {
            content_id_to_remote_id(self.contents.as_ref(), v)
        })?;

        let location_list = self.schema.get(&ValueKind::LocationList)?;
        transform_attributes(&mut hash, &location_list, |v| {
            location_id_list_to_remote_ids(self.locations.as_ref(), v)
        })?;

        debug!("converted layout value to portable hash");
        Ok(hash)
    }

    /// Converts a portable hash back into the live field value, resolving
    /// remote ids against this repository.
    ///
    /// `None` and any loosely-empty hash (`null`, `false`, `0`, `""`, `[]`,
    /// `{}`) delegate straight to the codec's null value; no lookups are
    /// performed. Any other non-object input is a
    /// [`ConvertError::BadValueType`].
    pub fn hash_to_field_value(&self, hash: Option<Value>) -> ConvertResult<LayoutValue> {
        let Some(mut hash) = hash.filter(|h| !is_empty_value(h)) else {
            return self.codec.from_hash(None);
        };
        if !hash.is_object() {
            return Err(ConvertError::BadValueType(format!(
                "expected a layout hash object, got {hash}"
            )));
        }

        let embed = self.schema.get(&ValueKind::Embed)?;
        transform_attributes(&mut hash, &embed, |v| {
            content_remote_id_or_id_to_id(self.contents.as_ref(), v)
        })?;

        let location_list = self.schema.get(&ValueKind::LocationList)?;
        transform_attributes(&mut hash, &location_list, |v| {
            location_remote_ids_to_id_list(self.locations.as_ref(), v)
        })?;

        debug!("converted portable hash to layout value");
        self.codec.from_hash(Some(hash))
    }
}

impl std::fmt::Debug for LayoutConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutConverter").finish_non_exhaustive()
    }
}
