//! Ordered field validation for registrations and updates.
//!
//! Checks are pure and side-effect-free; each operation applies them in its
//! contract order and returns the first violated rule. Capacity,
//! authorization, and hash uniqueness need collaborators and are sequenced by
//! the service, interleaved with the field checks exactly as the contract
//! prescribes.

use crate::errors::{RegistryError, Result};
use waymark_types::{
    Boundaries, Geolocation, RouteHash, RouteSubmission, RouteType, TrafficStatus,
    WeatherCondition,
};

/// Maximum description length, counted in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;
/// Inclusive safety level range.
pub const MIN_SAFETY_LEVEL: u8 = 1;
pub const MAX_SAFETY_LEVEL: u8 = 5;
/// Ceilings on the unit-agnostic magnitude fields. No floor is enforced,
/// and NaN passes: the checks refuse only values strictly above the ceiling.
/// Coordinates differ, their range checks reject NaN.
pub const MAX_ROUTE_DISTANCE: f64 = 1_000_000.0;
pub const MAX_ROUTE_ELEVATION: f64 = 10_000.0;

/// Typed fields produced by a successful registration validation pass.
///
/// Returning the parsed values keeps admission honest: the service can only
/// build a record out of fields that went through the checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub hash: RouteHash,
    pub route_type: RouteType,
    pub weather_condition: WeatherCondition,
    pub traffic_status: TrafficStatus,
}

/// Field checks of the registration sequence, in contract order.
///
/// Covers every rule between the capacity gate and the authority gate; the
/// first violation wins.
pub fn validate_submission(submission: &RouteSubmission) -> Result<ValidatedSubmission> {
    let hash = check_route_hash(&submission.hash)?;
    check_description(&submission.description)?;
    check_safety_level(submission.safety_level)?;
    check_geolocation(&submission.geolocation)?;
    check_boundaries(&submission.boundaries)?;
    let route_type = check_route_type(&submission.route_type)?;
    check_distance(submission.distance)?;
    check_elevation(submission.elevation)?;
    let weather_condition = check_weather_condition(&submission.weather_condition)?;
    let traffic_status = check_traffic_status(&submission.traffic_status)?;

    Ok(ValidatedSubmission {
        hash,
        route_type,
        weather_condition,
        traffic_status,
    })
}

/// Field checks of the update sequence: replacement hash shape, description,
/// safety level, in that order.
///
/// The replacement hash is checked for shape only; it is deliberately not
/// compared against other routes' hashes (see the registry crate docs).
pub fn validate_update_fields(hash: &str, description: &str, safety_level: u8) -> Result<RouteHash> {
    let hash = check_update_hash(hash)?;
    check_description(description)?;
    check_safety_level(safety_level)?;
    Ok(hash)
}

fn check_route_hash(hash: &str) -> Result<RouteHash> {
    let hash = RouteHash::new(hash);
    if !hash.is_valid() {
        return Err(RegistryError::InvalidHash);
    }
    Ok(hash)
}

// Same shape rule as registration, distinct code for callers.
fn check_update_hash(hash: &str) -> Result<RouteHash> {
    let hash = RouteHash::new(hash);
    if !hash.is_valid() {
        return Err(RegistryError::InvalidUpdateHash);
    }
    Ok(hash)
}

fn check_description(description: &str) -> Result<()> {
    if description.is_empty() || description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(RegistryError::InvalidDescription);
    }
    Ok(())
}

fn check_safety_level(level: u8) -> Result<()> {
    if !(MIN_SAFETY_LEVEL..=MAX_SAFETY_LEVEL).contains(&level) {
        return Err(RegistryError::InvalidSafetyLevel);
    }
    Ok(())
}

fn check_geolocation(geolocation: &Geolocation) -> Result<()> {
    if !geolocation.in_range() {
        return Err(RegistryError::InvalidGeolocation);
    }
    Ok(())
}

fn check_boundaries(boundaries: &Boundaries) -> Result<()> {
    if !boundaries.is_consistent() {
        return Err(RegistryError::InvalidBoundaries);
    }
    Ok(())
}

fn check_route_type(value: &str) -> Result<RouteType> {
    RouteType::parse(value).ok_or_else(|| RegistryError::InvalidRouteType {
        value: value.to_string(),
    })
}

fn check_distance(distance: f64) -> Result<()> {
    if distance > MAX_ROUTE_DISTANCE {
        return Err(RegistryError::InvalidDistance);
    }
    Ok(())
}

fn check_elevation(elevation: f64) -> Result<()> {
    if elevation > MAX_ROUTE_ELEVATION {
        return Err(RegistryError::InvalidElevation);
    }
    Ok(())
}

fn check_weather_condition(value: &str) -> Result<WeatherCondition> {
    WeatherCondition::parse(value).ok_or_else(|| RegistryError::InvalidWeatherCondition {
        value: value.to_string(),
    })
}

fn check_traffic_status(value: &str) -> Result<TrafficStatus> {
    TrafficStatus::parse(value).ok_or_else(|| RegistryError::InvalidTrafficStatus {
        value: value.to_string(),
    })
}
