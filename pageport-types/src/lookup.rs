//! Lookup records returned by the repository collaborator services.

use crate::{ContentId, ContentRemoteId, LocationId, LocationRemoteId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors surfaced by the content/location lookup services.
///
/// These are propagated unchanged through a conversion: a single failed
/// resolution aborts the whole field conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The id or remote id did not resolve to an entity.
    #[error("not found: {what}")]
    NotFound { what: String },

    /// The caller lacks read permission on the entity.
    #[error("unauthorized: {what}")]
    Unauthorized { what: String },
}

impl LookupError {
    /// Shorthand for a `NotFound` error describing the failed subject.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Shorthand for an `Unauthorized` error describing the denied subject.
    pub fn unauthorized(what: impl Into<String>) -> Self {
        Self::Unauthorized { what: what.into() }
    }
}

/// Identifying information of a content item, as returned by lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInfo {
    pub id: ContentId,
    pub remote_id: ContentRemoteId,
}

/// Identifying information of a location, as returned by lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub id: LocationId,
    pub remote_id: LocationRemoteId,
}
