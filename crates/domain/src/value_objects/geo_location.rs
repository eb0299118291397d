//! Geographic location value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in
    /// [-90, 90] or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in
    /// [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Common reference locations
impl GeoLocation {
    /// Seoul, South Korea
    #[must_use]
    pub const fn seoul() -> Self {
        Self::new_unchecked(37.5665, 126.978)
    }

    /// Busan, South Korea
    #[must_use]
    pub const fn busan() -> Self {
        Self::new_unchecked(35.1796, 129.0756)
    }

    /// Jeju, South Korea
    #[must_use]
    pub const fn jeju() -> Self {
        Self::new_unchecked(33.4996, 126.5312)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        let loc = GeoLocation::new(37.5665, 126.978).expect("valid coordinates");
        assert!((loc.latitude() - 37.5665).abs() < f64::EPSILON);
        assert!((loc.longitude() - 126.978).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn display_format() {
        let loc = GeoLocation::seoul();
        let display = format!("{loc}");
        assert!(display.contains("37.56"));
        assert!(display.contains("126.97"));
    }

    #[test]
    fn serialization_round_trip() {
        let loc = GeoLocation::new(33.4996, 126.5312).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }

    #[test]
    fn common_locations_are_valid() {
        for loc in [
            GeoLocation::seoul(),
            GeoLocation::busan(),
            GeoLocation::jeju(),
        ] {
            assert!(GeoLocation::new(loc.latitude(), loc.longitude()).is_ok());
        }
    }
}
