//! Layout field value ⇄ portable hash conversion.
//!
//! The top layer of pageport: wires the schema index, the tree walker, and
//! the repository lookup services into the two conversion entry points used
//! by migration definitions:
//!
//! - [`LayoutConverter::field_value_to_hash`] — live value → portable hash
//!   (numeric ids replaced by stable remote ids)
//! - [`LayoutConverter::hash_to_field_value`] — portable hash → live value
//!   (remote ids resolved back to this repository's numeric ids)
//!
//! The substitutions themselves are plain functions over `serde_json::Value`
//! so they can be tested without a converter, and so the walker stays
//! ignorant of what a substitution does.

mod codec;
mod converter;
mod error;
mod lookup;
mod substitution;

pub use codec::{LayoutCodec, PassthroughCodec};
pub use converter::LayoutConverter;
pub use error::{ConvertError, ConvertResult};
pub use lookup::{ContentLookup, LocationLookup, mock};
pub use substitution::{
    content_id_to_remote_id, content_remote_id_or_id_to_id, location_id_list_to_remote_ids,
    location_remote_ids_to_id_list,
};
