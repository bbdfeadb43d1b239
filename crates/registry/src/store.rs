//! In-memory route storage.
//!
//! A single lock guards all tables so that every read observes a consistent
//! snapshot of ids, records, and update slots. Identifier assignment lives
//! here: the store owns the id space and hands out dense ids starting at 0.

use parking_lot::RwLock;
use std::collections::HashMap;
use waymark_types::{Route, RouteId, RouteUpdate};

#[derive(Debug, Default)]
struct StoreInner {
    /// Next id to assign; also the count of ids ever assigned.
    next_id: RouteId,
    routes: HashMap<RouteId, Route>,
    /// Latest accepted update per route. One slot, overwritten each time.
    updates: HashMap<RouteId, RouteUpdate>,
}

/// Thread-safe map of registered routes keyed by id.
#[derive(Debug, Default)]
pub struct RouteStore {
    inner: RwLock<StoreInner>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next inserted route will receive.
    pub fn next_id(&self) -> RouteId {
        self.inner.read().next_id
    }

    /// Number of routes ever registered. Routes are never deleted, so this
    /// equals the number currently stored.
    pub fn route_count(&self) -> usize {
        self.inner.read().next_id as usize
    }

    /// Insert a route under a freshly assigned id and return that id.
    ///
    /// The id on the passed record is overwritten; callers cannot pick ids.
    pub fn insert(&self, mut route: Route) -> RouteId {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        route.id = id;
        inner.routes.insert(id, route);
        inner.next_id += 1;
        id
    }

    pub fn get(&self, id: RouteId) -> Option<Route> {
        self.inner.read().routes.get(&id).cloned()
    }

    /// Replace an existing record wholesale. Unknown ids are ignored so that
    /// replacement can never make an id spring into existence.
    pub fn replace(&self, id: RouteId, route: Route) {
        let mut inner = self.inner.write();
        if let Some(slot) = inner.routes.get_mut(&id) {
            *slot = route;
        }
    }

    /// Record the latest update for a route, displacing any previous one.
    pub fn record_update(&self, id: RouteId, update: RouteUpdate) {
        self.inner.write().updates.insert(id, update);
    }

    pub fn latest_update(&self, id: RouteId) -> Option<RouteUpdate> {
        self.inner.read().updates.get(&id).cloned()
    }

    /// Whether any stored route carries exactly this hash string.
    ///
    /// Comparison is verbatim: differently-cased encodings of the same bytes
    /// count as different hashes. Linear scan; swap in a hash index if the
    /// registry ever outgrows its configured capacity range.
    pub fn hash_exists(&self, hash: &str) -> bool {
        self.inner
            .read()
            .routes
            .values()
            .any(|route| route.hash.as_str() == hash)
    }
}
