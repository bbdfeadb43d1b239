use crate::{Boundaries, Geolocation, Principal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequentially assigned route identifier, dense and starting at 0.
pub type RouteId = u64;

/// Logical clock value supplied by the host (block/sequence height).
pub type Height = u64;

/// Expected length of an encoded route content hash (256 bits as hex).
pub const ROUTE_HASH_LENGTH: usize = 64;

/// Content fingerprint of a route, carried as the submitted hex string.
///
/// The string is stored verbatim: two hashes identify the same content only
/// if they match exactly, case included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteHash(pub String);

impl RouteHash {
    /// Wrap a hash string without checking its shape.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Get the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the string is exactly 64 hexadecimal characters (either case).
    pub fn is_valid(&self) -> bool {
        self.0.len() == ROUTE_HASH_LENGTH && hex::decode(&self.0).is_ok()
    }
}

impl fmt::Display for RouteHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Surface classification of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Road,
    Path,
    Water,
}

impl RouteType {
    /// Parse the exact wire string; anything else is outside the domain.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "road" => Some(Self::Road),
            "path" => Some(Self::Path),
            "water" => Some(Self::Water),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Path => "path",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prevailing weather reported for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Clear,
    Rainy,
    Stormy,
}

impl WeatherCondition {
    /// Parse the exact wire string; anything else is outside the domain.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "clear" => Some(Self::Clear),
            "rainy" => Some(Self::Rainy),
            "stormy" => Some(Self::Stormy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Rainy => "rainy",
            Self::Stormy => "stormy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reported traffic load on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficStatus {
    Low,
    Medium,
    High,
}

impl TrafficStatus {
    /// Parse the exact wire string; anything else is outside the domain.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TrafficStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered route record.
///
/// Mutated only by whole-field replacement on update; `id` and `creator`
/// never change after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub hash: RouteHash,
    pub description: String,
    pub safety_level: u8,
    pub geolocation: Geolocation,
    pub boundaries: Boundaries,
    pub route_type: RouteType,
    pub distance: f64,
    pub elevation: f64,
    pub weather_condition: WeatherCondition,
    pub traffic_status: TrafficStatus,
    /// Unvalidated passthrough flag raised by the submitter.
    pub emergency_status: bool,
    /// Height at creation or last update.
    pub timestamp: Height,
    pub creator: Principal,
}

/// The latest update applied to a route: a single slot, not a history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteUpdate {
    pub hash: RouteHash,
    pub description: String,
    pub safety_level: u8,
    pub timestamp: Height,
    pub updater: Principal,
}

/// Candidate fields for a new route, exactly as supplied by the host.
///
/// Enumerated fields stay strings here so that out-of-domain values surface
/// as the contract's typed errors instead of failing at the host boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSubmission {
    pub hash: String,
    pub description: String,
    pub safety_level: u8,
    pub geolocation: Geolocation,
    pub boundaries: Boundaries,
    pub route_type: String,
    pub distance: f64,
    pub elevation: f64,
    pub weather_condition: String,
    pub traffic_status: String,
    pub emergency_status: bool,
}
