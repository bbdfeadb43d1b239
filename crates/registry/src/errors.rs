//! Error types for the route registry.
//!
//! Every rejected call maps to exactly one kind, and each kind carries a
//! stable numeric code that is part of the caller-visible contract. Codes are
//! never renumbered; gaps in the sequence belong to retired checks.

use thiserror::Error;
use waymark_types::RouteId;

/// Failure kinds surfaced by registration, update, and lookup calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not a verified authority, or not the record's creator.
    #[error("caller is not authorized for this operation")]
    NotAuthorized,

    #[error("route hash must be 64 hexadecimal characters")]
    InvalidHash,

    #[error("description must be non-empty and at most 500 characters")]
    InvalidDescription,

    #[error("safety level must be between 1 and 5")]
    InvalidSafetyLevel,

    #[error("geolocation is outside the valid coordinate ranges")]
    InvalidGeolocation,

    #[error("a route with hash {hash} is already registered")]
    RouteAlreadyExists { hash: String },

    #[error("route {id} not found")]
    RouteNotFound { id: RouteId },

    #[error("boundaries must satisfy min <= max on both axes")]
    InvalidBoundaries,

    #[error("update hash must be 64 hexadecimal characters")]
    InvalidUpdateHash,

    #[error("registry is full: capacity is {max} routes")]
    MaxRoutesExceeded { max: usize },

    #[error("unknown route type: {value}")]
    InvalidRouteType { value: String },

    #[error("distance exceeds the maximum of 1000000")]
    InvalidDistance,

    #[error("elevation exceeds the maximum of 10000")]
    InvalidElevation,

    #[error("unknown weather condition: {value}")]
    InvalidWeatherCondition { value: String },

    #[error("unknown traffic status: {value}")]
    InvalidTrafficStatus { value: String },
}

impl RegistryError {
    /// Stable numeric code for the host-facing contract.
    pub fn code(&self) -> u16 {
        match self {
            Self::NotAuthorized => 100,
            Self::InvalidHash => 101,
            Self::InvalidDescription => 102,
            Self::InvalidSafetyLevel => 103,
            Self::InvalidGeolocation => 104,
            Self::RouteAlreadyExists { .. } => 105,
            Self::RouteNotFound { .. } => 107,
            Self::InvalidBoundaries => 111,
            Self::InvalidUpdateHash => 113,
            Self::MaxRoutesExceeded { .. } => 114,
            Self::InvalidRouteType { .. } => 115,
            Self::InvalidDistance => 116,
            Self::InvalidElevation => 117,
            Self::InvalidWeatherCondition { .. } => 118,
            Self::InvalidTrafficStatus { .. } => 119,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let table: &[(RegistryError, u16)] = &[
            (RegistryError::NotAuthorized, 100),
            (RegistryError::InvalidHash, 101),
            (RegistryError::InvalidDescription, 102),
            (RegistryError::InvalidSafetyLevel, 103),
            (RegistryError::InvalidGeolocation, 104),
            (
                RegistryError::RouteAlreadyExists {
                    hash: "00".repeat(32),
                },
                105,
            ),
            (RegistryError::RouteNotFound { id: 7 }, 107),
            (RegistryError::InvalidBoundaries, 111),
            (RegistryError::InvalidUpdateHash, 113),
            (RegistryError::MaxRoutesExceeded { max: 1000 }, 114),
            (
                RegistryError::InvalidRouteType {
                    value: "sky".into(),
                },
                115,
            ),
            (RegistryError::InvalidDistance, 116),
            (RegistryError::InvalidElevation, 117),
            (
                RegistryError::InvalidWeatherCondition {
                    value: "foggy".into(),
                },
                118,
            ),
            (
                RegistryError::InvalidTrafficStatus {
                    value: "jammed".into(),
                },
                119,
            ),
        ];

        for (error, code) in table {
            assert_eq!(error.code(), *code, "code drifted for {error:?}");
        }
    }

    #[test]
    fn registration_and_update_hash_errors_are_distinct() {
        assert_ne!(
            RegistryError::InvalidHash.code(),
            RegistryError::InvalidUpdateHash.code()
        );
    }
}
