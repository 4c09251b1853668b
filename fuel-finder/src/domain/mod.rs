//! Domain types for the fuel station finder.
//!
//! This module contains the core domain model types that represent
//! validated station data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod coordinate;
mod decimal;
mod fuel_type;
mod price;
mod station;

pub use coordinate::{Coordinate, Distance, EARTH_RADIUS_M, InvalidCoordinate};
pub use decimal::{InvalidDecimal, parse_decimal};
pub use fuel_type::{FuelType, UnknownFuelType};
pub use price::{InvalidPrice, Price};
pub use station::{Station, StationDetails, StationId};
