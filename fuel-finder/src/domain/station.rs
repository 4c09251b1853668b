//! Fuel station domain type.

use std::fmt;

use uuid::Uuid;

use super::coordinate::{Coordinate, Distance};
use super::price::Price;

/// In-memory identity of a station, used to key list entries.
///
/// A fresh id is assigned every time a `Station` is created; it is not a
/// persistence key and two fetches of the same station get different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(Uuid);

impl StationId {
    fn new() -> Self {
        StationId(Uuid::new_v4())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive text of a station, copied verbatim from the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationDetails {
    pub name: String,
    pub trader: String,
    pub town: String,
    pub municipality: String,
    pub schedule: String,
}

/// A fuel station with a validated price.
///
/// The price and latitude/longitude texts are kept exactly as published so
/// they display as the source wrote them. The numeric values derived from
/// them were checked once, when the record was validated; the coordinate is
/// absent if the texts do not form a valid position.
///
/// Stations are only built by record validation, so a `Station` always has
/// a name and a parsed price. Code outside this crate cannot assemble one:
///
/// ```compile_fail,E0624
/// use fuel_finder::domain::{Price, Station, StationDetails};
///
/// let price = Price::parse("1,459").unwrap();
/// Station::new(StationDetails::default(), price, "40", "-3", None);
/// ```
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    details: StationDetails,
    price: Price,
    latitude: String,
    longitude: String,
    coordinate: Option<Coordinate>,
}

impl Station {
    /// Assemble a station from already validated parts.
    ///
    /// `coordinate` is the position parsed from `latitude` and `longitude`.
    pub(crate) fn new(
        details: StationDetails,
        price: Price,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        coordinate: Option<Coordinate>,
    ) -> Self {
        Self {
            id: StationId::new(),
            details,
            price,
            latitude: latitude.into(),
            longitude: longitude.into(),
            coordinate,
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn trader(&self) -> &str {
        &self.details.trader
    }

    pub fn town(&self) -> &str {
        &self.details.town
    }

    pub fn municipality(&self) -> &str {
        &self.details.municipality
    }

    pub fn schedule(&self) -> &str {
        &self.details.schedule
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Latitude as published.
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Longitude as published.
    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// Distance from `reference`, or `None` if the station has no position.
    pub fn distance_from(&self, reference: &Coordinate) -> Option<Distance> {
        self.coordinate.map(|c| c.distance_to(reference))
    }

    /// Town and municipality for display.
    ///
    /// Collapses to the municipality when the town is empty or repeats it.
    pub fn full_address(&self) -> String {
        let town = &self.details.town;
        let municipality = &self.details.municipality;

        if town.is_empty() || town == municipality {
            municipality.clone()
        } else {
            format!("{town}, {municipality}")
        }
    }
}
