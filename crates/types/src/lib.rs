//! Shared domain types for the Waymark route registry.

pub mod geo;
pub mod principal;
pub mod route;

pub use geo::*;
pub use principal::*;
pub use route::*;
