//! Station ranking for search results.
//!
//! Stations are ordered by price or by distance from a reference point.
//! Sorting is stable throughout: stations that compare equal, and stations
//! whose sort key is unavailable, keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Station};

/// What to order stations by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Cheapest first
    #[default]
    Price,
    /// Nearest first
    Distance,
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortCriterion::Price => f.write_str("price"),
            SortCriterion::Distance => f.write_str("distance"),
        }
    }
}

/// Rank stations by `criterion`.
///
/// - `Price`: ascending price. A station whose price value is not finite
///   goes after every finite one.
/// - `Distance`: ascending distance from `reference`. Stations without a
///   position go after every station with one. Without a reference the
///   input order is returned unchanged.
///
/// Returns a new ordering; the input is not modified.
pub fn rank_stations(
    stations: &[Arc<Station>],
    criterion: SortCriterion,
    reference: Option<&Coordinate>,
) -> Vec<Arc<Station>> {
    match criterion {
        SortCriterion::Price => {
            sort_by_key(stations, |s| Some(s.price().value()).filter(|v| v.is_finite()))
        }
        SortCriterion::Distance => match reference {
            Some(reference) => {
                sort_by_key(stations, |s| s.distance_from(reference).map(|d| d.meters()))
            }
            None => stations.to_vec(),
        },
    }
}

/// Stable sort on a key computed once per station.
fn sort_by_key(
    stations: &[Arc<Station>],
    key: impl Fn(&Station) -> Option<f64>,
) -> Vec<Arc<Station>> {
    let mut keyed: Vec<(Option<f64>, Arc<Station>)> = stations
        .iter()
        .map(|s| (key(s), Arc::clone(s)))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_present_first(*a, *b));

    keyed.into_iter().map(|(_, s)| s).collect()
}

/// Order with missing values after all present ones.
///
/// Present values are finite. Equal values compare equal, including `0.0`
/// and `-0.0`, so a stable sort keeps their order. Two missing values also
/// compare equal.
fn compare_present_first(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
