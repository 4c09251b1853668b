//! Conversion from station records to domain types.
//!
//! Records arrive with every field as text. This module checks that the
//! fields a station cannot do without are present and that the price and
//! position parse and fall within range. A record that fails any check is
//! dropped as a whole.

use tracing::debug;

use crate::domain::{Coordinate, InvalidCoordinate, InvalidPrice, Price, Station, StationDetails};

use super::types::StationRecord;

/// Why a record was not turned into a station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Price(#[from] InvalidPrice),

    #[error(transparent)]
    Coordinate(#[from] InvalidCoordinate),
}

/// Validate a single record.
///
/// The resulting station keeps the record's text fields verbatim; only the
/// derived price and coordinate have been parsed.
pub fn validate_record(record: &StationRecord) -> Result<Station, RejectReason> {
    if record.name.is_empty() {
        return Err(RejectReason::MissingField("name"));
    }
    if record.price.is_empty() {
        return Err(RejectReason::MissingField("price"));
    }
    if record.latitude.is_empty() {
        return Err(RejectReason::MissingField("latitude"));
    }
    if record.longitude.is_empty() {
        return Err(RejectReason::MissingField("longitude"));
    }

    // Stations without a usable position are rejected here, even though
    // `Station` itself could represent them.
    let coordinate = Coordinate::parse(&record.latitude, &record.longitude)?;
    let price = Price::parse(&record.price)?;

    let details = StationDetails {
        name: record.name.clone(),
        trader: record.trader.clone(),
        town: record.town.clone(),
        municipality: record.municipality.clone(),
        schedule: record.schedule.clone(),
    };

    Ok(Station::new(
        details,
        price,
        record.latitude.clone(),
        record.longitude.clone(),
        Some(coordinate),
    ))
}

/// Validate a batch of records, dropping the ones that fail.
///
/// The output can be shorter than the input; there is no positional
/// correspondence between the two.
pub fn validate_all(records: &[StationRecord]) -> Vec<Station> {
    let mut stations = Vec::with_capacity(records.len());

    for record in records {
        match validate_record(record) {
            Ok(station) => stations.push(station),
            Err(reason) => {
                debug!(name = %record.name, %reason, "dropping station record");
            }
        }
    }

    stations
}
