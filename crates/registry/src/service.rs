//! Registration service: admission control and record mutation.
//!
//! The service sequences the full admission pipeline for each operation and
//! serializes mutations behind a write gate, so a decision and the write it
//! authorizes always happen against the same store state.

use crate::errors::{RegistryError, Result};
use crate::store::RouteStore;
use crate::validation::{validate_submission, validate_update_fields};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use waymark_authority::AuthorityRegistry;
use waymark_types::{Height, Principal, Route, RouteId, RouteSubmission, RouteUpdate};

/// Default ceiling on the number of registered routes.
pub const DEFAULT_MAX_ROUTES: usize = 1000;

/// Tunable limits for a registry instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registrations are refused once this many routes exist.
    pub max_routes: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_routes: DEFAULT_MAX_ROUTES,
        }
    }
}

/// The route registry's public surface.
///
/// Holds the record store and the authority set behind a trait object so
/// hosts can bring their own authority source.
pub struct RegistrationService {
    store: RouteStore,
    authorities: Arc<dyn AuthorityRegistry>,
    config: RegistryConfig,
    /// Serializes mutating operations. Reads go straight to the store.
    write_gate: Mutex<()>,
}

impl RegistrationService {
    pub fn new(authorities: Arc<dyn AuthorityRegistry>) -> Self {
        Self::with_config(authorities, RegistryConfig::default())
    }

    pub fn with_config(authorities: Arc<dyn AuthorityRegistry>, config: RegistryConfig) -> Self {
        Self {
            store: RouteStore::new(),
            authorities,
            config,
            write_gate: Mutex::new(()),
        }
    }

    /// Register a new route on behalf of `caller` at logical time `height`.
    ///
    /// Runs the admission sequence: capacity, field validation, authority,
    /// hash uniqueness. The first failed gate decides the error; nothing is
    /// written and no id is consumed unless every gate passes.
    pub fn register_route(
        &self,
        submission: RouteSubmission,
        caller: &Principal,
        height: Height,
    ) -> Result<RouteId> {
        let _gate = self.write_gate.lock();
        match self.admit(submission, caller, height) {
            Ok(id) => {
                info!(route_id = id, height, caller = %caller, "route registered");
                Ok(id)
            }
            Err(err) => {
                debug!(code = err.code(), error = %err, "registration rejected");
                Err(err)
            }
        }
    }

    fn admit(
        &self,
        submission: RouteSubmission,
        caller: &Principal,
        height: Height,
    ) -> Result<RouteId> {
        let next_id = self.store.next_id();
        if next_id as usize >= self.config.max_routes {
            return Err(RegistryError::MaxRoutesExceeded {
                max: self.config.max_routes,
            });
        }

        let parsed = validate_submission(&submission)?;

        if !self.authorities.is_verified_authority(caller) {
            return Err(RegistryError::NotAuthorized);
        }

        if self.store.hash_exists(parsed.hash.as_str()) {
            return Err(RegistryError::RouteAlreadyExists {
                hash: parsed.hash.as_str().to_string(),
            });
        }

        let route = Route {
            id: next_id,
            hash: parsed.hash,
            description: submission.description,
            safety_level: submission.safety_level,
            geolocation: submission.geolocation,
            boundaries: submission.boundaries,
            route_type: parsed.route_type,
            distance: submission.distance,
            elevation: submission.elevation,
            weather_condition: parsed.weather_condition,
            traffic_status: parsed.traffic_status,
            emergency_status: submission.emergency_status,
            timestamp: height,
            creator: caller.clone(),
        };
        Ok(self.store.insert(route))
    }

    /// Revise a route's hash, description, and safety level.
    ///
    /// Only the route's creator may update it; authority membership is not
    /// consulted here. Returns `Ok(true)` on success.
    pub fn update_route(
        &self,
        id: RouteId,
        hash: &str,
        description: &str,
        safety_level: u8,
        caller: &Principal,
        height: Height,
    ) -> Result<bool> {
        let _gate = self.write_gate.lock();
        match self.apply_update(id, hash, description, safety_level, caller, height) {
            Ok(applied) => {
                info!(route_id = id, height, caller = %caller, "route updated");
                Ok(applied)
            }
            Err(err) => {
                debug!(route_id = id, code = err.code(), error = %err, "update rejected");
                Err(err)
            }
        }
    }

    fn apply_update(
        &self,
        id: RouteId,
        hash: &str,
        description: &str,
        safety_level: u8,
        caller: &Principal,
        height: Height,
    ) -> Result<bool> {
        let route = self
            .store
            .get(id)
            .ok_or(RegistryError::RouteNotFound { id })?;

        if route.creator != *caller {
            return Err(RegistryError::NotAuthorized);
        }

        let hash = validate_update_fields(hash, description, safety_level)?;

        let mut revised = route;
        revised.hash = hash.clone();
        revised.description = description.to_string();
        revised.safety_level = safety_level;
        revised.timestamp = height;
        self.store.replace(id, revised);

        self.store.record_update(
            id,
            RouteUpdate {
                hash,
                description: description.to_string(),
                safety_level,
                timestamp: height,
                updater: caller.clone(),
            },
        );
        Ok(true)
    }

    /// Fetch a route by id.
    pub fn get_route(&self, id: RouteId) -> Result<Route> {
        self.store
            .get(id)
            .ok_or(RegistryError::RouteNotFound { id })
    }

    /// Fetch the latest recorded update for a route. Errors if the route has
    /// never been updated, even when the route itself exists.
    pub fn get_route_update(&self, id: RouteId) -> Result<RouteUpdate> {
        self.store
            .latest_update(id)
            .ok_or(RegistryError::RouteNotFound { id })
    }

    /// Number of registered routes.
    pub fn route_count(&self) -> usize {
        self.store.route_count()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}
