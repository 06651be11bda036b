//! Repository lookup abstractions.
//!
//! The CMS repository owns id ⇄ remote-id resolution; the converter only
//! needs the two narrow lookup surfaces below. Calls are synchronous and
//! blocking — one matched attribute means one lookup, in walk order.

use pageport_types::{
    ContentId, ContentInfo, ContentRemoteId, LocationId, LocationInfo, LocationRemoteId,
    LookupResult,
};

/// Resolves content items by numeric id or stable remote id.
pub trait ContentLookup: Send + Sync {
    /// Loads content identifying info by numeric id.
    fn load_by_id(&self, id: ContentId) -> LookupResult<ContentInfo>;

    /// Loads content identifying info by remote id.
    fn load_by_remote_id(&self, remote_id: &ContentRemoteId) -> LookupResult<ContentInfo>;
}

/// Resolves locations by numeric id or stable remote id.
pub trait LocationLookup: Send + Sync {
    /// Loads location identifying info by numeric id.
    fn load_by_id(&self, id: LocationId) -> LookupResult<LocationInfo>;

    /// Loads location identifying info by remote id.
    fn load_by_remote_id(&self, remote_id: &LocationRemoteId) -> LookupResult<LocationInfo>;
}

/// In-memory lookup doubles for testing.
pub mod mock {
    use super::*;
    use pageport_types::LookupError;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A mock repository with registered id ↔ remote-id pairs.
    ///
    /// Unregistered lookups fail with `NotFound`; ids registered as denied
    /// fail with `Unauthorized`. Every lookup, successful or not, bumps the
    /// call counter.
    #[derive(Debug, Default)]
    pub struct MockRepository {
        contents_by_id: HashMap<u64, String>,
        contents_by_remote: HashMap<String, u64>,
        locations_by_id: HashMap<u64, String>,
        locations_by_remote: HashMap<String, u64>,
        denied_contents: HashSet<u64>,
        denied_locations: HashSet<u64>,
        calls: AtomicUsize,
    }

    impl MockRepository {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers a content id ↔ remote-id pair.
        #[must_use]
        pub fn with_content(mut self, id: u64, remote_id: impl Into<String>) -> Self {
            let remote_id = remote_id.into();
            self.contents_by_remote.insert(remote_id.clone(), id);
            self.contents_by_id.insert(id, remote_id);
            self
        }

        /// Registers a location id ↔ remote-id pair.
        #[must_use]
        pub fn with_location(mut self, id: u64, remote_id: impl Into<String>) -> Self {
            let remote_id = remote_id.into();
            self.locations_by_remote.insert(remote_id.clone(), id);
            self.locations_by_id.insert(id, remote_id);
            self
        }

        /// Makes every lookup of this content id fail with `Unauthorized`.
        #[must_use]
        pub fn deny_content(mut self, id: u64) -> Self {
            self.denied_contents.insert(id);
            self
        }

        /// Makes every lookup of this location id fail with `Unauthorized`.
        #[must_use]
        pub fn deny_location(mut self, id: u64) -> Self {
            self.denied_locations.insert(id);
            self
        }

        /// Number of lookups performed so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn bump(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl ContentLookup for MockRepository {
        fn load_by_id(&self, id: ContentId) -> LookupResult<ContentInfo> {
            self.bump();
            if self.denied_contents.contains(&id.as_u64()) {
                return Err(LookupError::unauthorized(format!("content {id}")));
            }
            let remote_id = self
                .contents_by_id
                .get(&id.as_u64())
                .ok_or_else(|| LookupError::not_found(format!("content {id}")))?;
            Ok(ContentInfo {
                id,
                remote_id: ContentRemoteId::new(remote_id.clone()),
            })
        }

        fn load_by_remote_id(&self, remote_id: &ContentRemoteId) -> LookupResult<ContentInfo> {
            self.bump();
            let id = self
                .contents_by_remote
                .get(remote_id.as_str())
                .copied()
                .ok_or_else(|| LookupError::not_found(format!("content remote id {remote_id}")))?;
            if self.denied_contents.contains(&id) {
                return Err(LookupError::unauthorized(format!("content {id}")));
            }
            Ok(ContentInfo {
                id: ContentId::new(id),
                remote_id: remote_id.clone(),
            })
        }
    }

    impl LocationLookup for MockRepository {
        fn load_by_id(&self, id: LocationId) -> LookupResult<LocationInfo> {
            self.bump();
            if self.denied_locations.contains(&id.as_u64()) {
                return Err(LookupError::unauthorized(format!("location {id}")));
            }
            let remote_id = self
                .locations_by_id
                .get(&id.as_u64())
                .ok_or_else(|| LookupError::not_found(format!("location {id}")))?;
            Ok(LocationInfo {
                id,
                remote_id: LocationRemoteId::new(remote_id.clone()),
            })
        }

        fn load_by_remote_id(&self, remote_id: &LocationRemoteId) -> LookupResult<LocationInfo> {
            self.bump();
            let id = self
                .locations_by_remote
                .get(remote_id.as_str())
                .copied()
                .ok_or_else(|| {
                    LookupError::not_found(format!("location remote id {remote_id}"))
                })?;
            if self.denied_locations.contains(&id) {
                return Err(LookupError::unauthorized(format!("location {id}")));
            }
            Ok(LocationInfo {
                id: LocationId::new(id),
                remote_id: remote_id.clone(),
            })
        }
    }

    /// A repository that panics on any lookup.
    ///
    /// Used to prove that a code path performs no lookups at all (null and
    /// pass-through substitution cases).
    #[derive(Debug, Default)]
    pub struct UnreachableRepository;

    impl ContentLookup for UnreachableRepository {
        fn load_by_id(&self, id: ContentId) -> LookupResult<ContentInfo> {
            panic!("unexpected content lookup by id {id}");
        }

        fn load_by_remote_id(&self, remote_id: &ContentRemoteId) -> LookupResult<ContentInfo> {
            panic!("unexpected content lookup by remote id {remote_id}");
        }
    }

    impl LocationLookup for UnreachableRepository {
        fn load_by_id(&self, id: LocationId) -> LookupResult<LocationInfo> {
            panic!("unexpected location lookup by id {id}");
        }

        fn load_by_remote_id(&self, remote_id: &LocationRemoteId) -> LookupResult<LocationInfo> {
            panic!("unexpected location lookup by remote id {remote_id}");
        }
    }
}
