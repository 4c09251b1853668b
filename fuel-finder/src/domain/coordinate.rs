//! Geographic coordinates and great-circle distance.

use std::cmp::Ordering;
use std::fmt;

use super::decimal::parse_decimal;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Error returned when a latitude/longitude pair is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCoordinate {
    /// Latitude did not parse or is outside [-90, 90]
    #[error("invalid latitude: {0:?}")]
    Latitude(String),

    /// Longitude did not parse or is outside [-180, 180]
    #[error("invalid longitude: {0:?}")]
    Longitude(String),
}

/// A point on the Earth's surface in decimal degrees.
///
/// Both components are finite, latitude is within [-90, 90] and longitude
/// within [-180, 180]. Any `Coordinate` value satisfies this by construction.
///
/// # Examples
///
/// ```
/// use fuel_finder::domain::Coordinate;
///
/// let madrid = Coordinate::new(40.4168, -3.7038).unwrap();
/// assert_eq!(madrid.latitude(), 40.4168);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::parse("40,4168", "-3,7038").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate from numeric degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || latitude.abs() > 90.0 {
            return Err(InvalidCoordinate::Latitude(latitude.to_string()));
        }
        if !longitude.is_finite() || longitude.abs() > 180.0 {
            return Err(InvalidCoordinate::Longitude(longitude.to_string()));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a coordinate from locale-formatted latitude and longitude text.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, InvalidCoordinate> {
        let lat = parse_decimal(latitude)
            .map_err(|_| InvalidCoordinate::Latitude(latitude.to_string()))?;
        let lon = parse_decimal(longitude)
            .map_err(|_| InvalidCoordinate::Longitude(longitude.to_string()))?;

        if lat.abs() > 90.0 {
            return Err(InvalidCoordinate::Latitude(latitude.to_string()));
        }
        if lon.abs() > 180.0 {
            return Err(InvalidCoordinate::Longitude(longitude.to_string()));
        }

        Ok(Self {
            latitude: lat,
            longitude: lon,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another coordinate (haversine).
    ///
    /// The result is exactly symmetric: both orderings evaluate the formula
    /// on the same canonically ordered pair.
    pub fn distance_to(&self, other: &Coordinate) -> Distance {
        let (a, b) = match self.canonical_cmp(other) {
            Ordering::Greater => (other, self),
            _ => (self, other),
        };

        let lat1 = a.latitude.to_radians();
        let lat2 = b.latitude.to_radians();
        let delta_lat = (b.latitude - a.latitude).to_radians();
        let delta_lon = (b.longitude - a.longitude).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().min(1.0).asin();

        Distance::from_meters(EARTH_RADIUS_M * c)
    }

    fn canonical_cmp(&self, other: &Coordinate) -> Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then_with(|| self.longitude.total_cmp(&other.longitude))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A non-negative distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    fn from_meters(meters: f64) -> Self {
        Distance(meters.max(0.0))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    pub fn kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// Formats as whole meters below 1 km (`"850 m"`), otherwise kilometers
/// with one decimal place (`"1.2 km"`).
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 999.5 m and up would print as "1000 m"
        if self.0.round() < 1000.0 {
            write!(f, "{:.0} m", self.0)
        } else {
            write!(f, "{:.1} km", self.kilometers())
        }
    }
}
