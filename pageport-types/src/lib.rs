//! Core type definitions for pageport.
//!
//! This crate defines the fundamental, CMS-agnostic types used throughout
//! the conversion engine:
//! - Content and Location identifiers (numeric repository ids)
//! - Remote identifiers (stable across repository instances)
//! - Lookup records and the lookup error surface
//!
//! Everything layout-specific (zones, blocks, attributes, block-definition
//! configuration) belongs in `pageport-model`, not here.

mod ids;
mod lookup;

pub use ids::{ContentId, ContentRemoteId, LocationId, LocationRemoteId};
pub use lookup::{ContentInfo, LocationInfo, LookupError, LookupResult};
