//! Validated Route Registry
//!
//! This crate implements the registry proper: ordered admission checks,
//! authority gating, capacity limits, and the in-memory record store. Route
//! ids are dense and assigned in registration order; every rejection maps to
//! a stable numeric code (see [`errors::RegistryError::code`]).
//!
//! Updates deliberately skip the cross-route hash uniqueness check that
//! registration performs; a replacement hash only has to be well-formed.

pub mod errors;
pub mod service;
pub mod store;
pub mod validation;

pub use errors::{RegistryError, Result};
pub use service::{RegistrationService, RegistryConfig, DEFAULT_MAX_ROUTES};
pub use store::RouteStore;
pub use validation::*;
