//! Unit tests for the search orchestrator.

use super::*;
use crate::domain::Coordinate;
use crate::preferences::{MemoryPreferences, StoredPreferences};
use crate::source::{
    FetchError, HttpStationSource, MockStationSource, SourceConfig, StationRecord,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn madrid() -> Coordinate {
    Coordinate::new(40.4168, -3.7038).unwrap()
}

fn record(name: &str, price: &str, lat: &str, lon: &str) -> StationRecord {
    StationRecord {
        trader: "TRADER".to_string(),
        name: name.to_string(),
        town: "Madrid".to_string(),
        municipality: "Madrid".to_string(),
        schedule: "24H".to_string(),
        price: price.to_string(),
        latitude: lat.to_string(),
        longitude: lon.to_string(),
    }
}

fn three_records() -> Vec<StationRecord> {
    vec![
        record("Repsol", "1.450", "40.4268", "-3.6938"),
        record("Cepsa", "1.200", "40.3968", "-3.6888"),
        record("Galp", "1.300", "40.4248", "-3.6788"),
    ]
}

fn prices(stations: &[Arc<Station>]) -> Vec<&str> {
    stations.iter().map(|s| s.price().as_str()).collect()
}

fn names(stations: &[Arc<Station>]) -> Vec<&str> {
    stations.iter().map(|s| s.name()).collect()
}

fn orchestrator(
    source: MockStationSource,
) -> SearchOrchestrator<MockStationSource, MemoryPreferences> {
    SearchOrchestrator::new(source, MemoryPreferences::new(), SearchConfig::default())
}

/// Source that answers each fetch with the next scripted response.
struct ScriptedSource {
    responses: Mutex<VecDeque<(Duration, Result<Vec<StationRecord>, String>)>>,
}

impl ScriptedSource {
    fn new(responses: Vec<(Duration, Result<Vec<StationRecord>, String>)>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

impl StationSource for ScriptedSource {
    async fn fetch_nearby(&self, _query: &NearbyQuery) -> Result<Vec<StationRecord>, FetchError> {
        let (delay, result) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected fetch");
        tokio::time::sleep(delay).await;
        result.map_err(FetchError::Unavailable)
    }
}

/// Source that serves records once, then talks to an unreachable host.
struct LosesConnection {
    first: MockStationSource,
    then: HttpStationSource,
    calls: AtomicUsize,
}

impl LosesConnection {
    fn new(records: Vec<StationRecord>) -> Self {
        // Port 9 (discard) on localhost is almost never listening.
        let config = SourceConfig::new("http://127.0.0.1:9").with_timeout(2);
        let then = HttpStationSource::new(config).unwrap();
        Self {
            first: MockStationSource::new(records),
            then,
            calls: AtomicUsize::new(0),
        }
    }
}

impl StationSource for LosesConnection {
    async fn fetch_nearby(&self, query: &NearbyQuery) -> Result<Vec<StationRecord>, FetchError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.first.fetch_nearby(query).await
        } else {
            self.then.fetch_nearby(query).await
        }
    }
}

fn barcelona() -> Coordinate {
    Coordinate::new(41.3874, 2.1686).unwrap()
}

#[test]
fn initial_state_uses_defaults() {
    let orch = orchestrator(MockStationSource::default());
    let state = orch.snapshot();

    assert_eq!(state.phase, SearchPhase::Idle);
    assert!(!state.is_loading());
    assert_eq!(state.error(), None);
    assert!(state.reference.is_none());
    assert!(state.stations.is_empty());
    assert_eq!(state.radius_text, "10");
    assert_eq!(state.radius_km, 10.0);
    assert_eq!(state.fuel_type, FuelType::Gasoline95E5);
    assert_eq!(state.sort, SortCriterion::Price);
    assert!(state.updated_at.is_none());
}

#[test]
fn initial_state_restores_preferences() {
    let prefs = MemoryPreferences::with(StoredPreferences {
        fuel_type: Some("Gasoil_B".into()),
        search_radius_km: Some("500".into()),
    });
    let orch = SearchOrchestrator::new(
        MockStationSource::default(),
        prefs,
        SearchConfig::default(),
    );
    let state = orch.snapshot();

    assert_eq!(state.fuel_type, FuelType::GasoilB);
    assert_eq!(state.radius_text, "500");
    assert_eq!(state.radius_km, 100.0);
}

#[test]
fn unknown_stored_fuel_type_falls_back() {
    let prefs = MemoryPreferences::with(StoredPreferences {
        fuel_type: Some("Diesel".into()),
        search_radius_km: None,
    });
    let orch = SearchOrchestrator::new(
        MockStationSource::default(),
        prefs,
        SearchConfig::default(),
    );

    assert_eq!(orch.snapshot().fuel_type, FuelType::Gasoline95E5);
}

#[tokio::test]
async fn search_publishes_stations_sorted_by_price() {
    let source = MockStationSource::new(three_records());
    let orch = orchestrator(source.clone());
    orch.set_radius("10");
    orch.set_fuel_type(FuelType::GasoilA);

    let state = orch.search(madrid()).await;

    assert_eq!(state.phase, SearchPhase::Ready);
    assert!(!state.is_loading());
    assert_eq!(state.error(), None);
    assert_eq!(prices(&state.stations), vec!["1.200", "1.300", "1.450"]);
    assert_eq!(prices(&state.fetched), vec!["1.450", "1.200", "1.300"]);
    assert_eq!(state.reference, Some(madrid()));
    assert!(state.updated_at.is_some());

    let queries = source.queries().await;
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].latitude, 40.4168);
    assert_eq!(queries[0].longitude, -3.7038);
    assert_eq!(queries[0].radius_meters, 10_000);
    assert_eq!(queries[0].fuel_type, FuelType::GasoilA);
}

#[tokio::test]
async fn search_drops_invalid_records() {
    let mut records = three_records();
    records.push(record("", "1.000", "40.4", "-3.7"));
    records.push(record("Bad lat", "1.000", "91", "-3.7"));
    records.push(record("Bad price", "-1", "40.4", "-3.7"));

    let orch = orchestrator(MockStationSource::new(records));
    let state = orch.search(madrid()).await;

    assert_eq!(state.stations.len(), 3);
    assert_eq!(names(&state.stations), vec!["Cepsa", "Galp", "Repsol"]);
}

#[tokio::test]
async fn no_valid_stations_is_ready_not_failed() {
    let orch = orchestrator(MockStationSource::new(vec![record("X", "", "40", "-3")]));
    let state = orch.search(madrid()).await;

    assert_eq!(state.phase, SearchPhase::Ready);
    assert_eq!(state.error(), None);
    assert!(state.stations.is_empty());
}

#[tokio::test]
async fn failed_search_keeps_previous_stations() {
    let source = MockStationSource::new(three_records());
    let orch = orchestrator(source.clone());

    let before = orch.search(madrid()).await;
    assert_eq!(before.stations.len(), 3);

    source.set_failure(Some("connection reset".into())).await;
    let after = orch.search(madrid()).await;

    assert!(!after.is_loading());
    assert_eq!(after.error(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(prices(&after.stations), prices(&before.stations));
    for (a, b) in after.stations.iter().zip(&before.stations) {
        assert!(Arc::ptr_eq(a, b));
    }
}

#[tokio::test]
async fn failed_search_keeps_previous_reference() {
    let source = MockStationSource::new(three_records());
    let orch = orchestrator(source.clone());
    orch.search(madrid()).await;

    source.set_failure(Some("timeout".into())).await;
    let state = orch.search(barcelona()).await;

    assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(state.reference, Some(madrid()));
    for station in &state.stations {
        assert!(station.distance_from(&madrid()).unwrap().kilometers() < 5.0);
    }

    let state = orch.set_sort_criterion(SortCriterion::Distance);
    assert_eq!(state.reference, Some(madrid()));
    assert_eq!(names(&state.stations), vec!["Repsol", "Galp", "Cepsa"]);
}

#[tokio::test]
async fn reference_moves_only_when_search_succeeds() {
    let source = MockStationSource::new(three_records());
    source.set_delay(Some(Duration::from_millis(200))).await;
    let orch = Arc::new(orchestrator(source));
    orch.search(madrid()).await;

    let mut rx = orch.subscribe();
    let task = {
        let orch = Arc::clone(&orch);
        tokio::spawn(async move { orch.search(barcelona()).await })
    };

    rx.changed().await.unwrap();
    assert!(rx.borrow().is_loading());
    assert_eq!(rx.borrow().reference, Some(madrid()));

    let state = task.await.unwrap();
    assert_eq!(state.reference, Some(barcelona()));
}

#[tokio::test]
async fn transport_error_keeps_previous_stations() {
    let orch = SearchOrchestrator::new(
        LosesConnection::new(three_records()),
        MemoryPreferences::new(),
        SearchConfig::default(),
    );

    let before = orch.search(madrid()).await;
    assert_eq!(before.phase, SearchPhase::Ready);

    let after = orch.search(madrid()).await;

    assert!(!after.is_loading());
    assert_eq!(after.error(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(prices(&after.stations), vec!["1.200", "1.300", "1.450"]);
    assert_eq!(after.updated_at, before.updated_at);
}

#[tokio::test]
async fn transport_error_is_a_network_failure() {
    let source = LosesConnection::new(vec![]);
    source.calls.store(1, Ordering::SeqCst);

    let query = NearbyQuery {
        latitude: 40.4168,
        longitude: -3.7038,
        radius_meters: 10_000,
        fuel_type: FuelType::default(),
    };
    let err = source.fetch_nearby(&query).await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn failed_first_search_has_empty_list() {
    let source = MockStationSource::default();
    source.set_failure(Some("dns".into())).await;
    let orch = orchestrator(source);

    let state = orch.search(madrid()).await;

    assert_eq!(
        state.phase,
        SearchPhase::Failed {
            message: FETCH_ERROR_MESSAGE.to_string()
        }
    );
    assert!(state.stations.is_empty());
}

#[tokio::test]
async fn successful_search_clears_previous_error() {
    let source = MockStationSource::new(three_records());
    source.set_failure(Some("offline".into())).await;
    let orch = orchestrator(source.clone());

    assert!(orch.search(madrid()).await.error().is_some());

    source.set_failure(None).await;
    let state = orch.search(madrid()).await;
    assert_eq!(state.error(), None);
    assert_eq!(state.phase, SearchPhase::Ready);
}

#[tokio::test]
async fn search_is_loading_while_fetch_in_flight() {
    let source = MockStationSource::new(three_records());
    source.set_delay(Some(Duration::from_millis(200))).await;
    let orch = Arc::new(orchestrator(source));
    let mut rx = orch.subscribe();

    let task = {
        let orch = Arc::clone(&orch);
        tokio::spawn(async move { orch.search(madrid()).await })
    };

    rx.changed().await.unwrap();
    {
        let state = rx.borrow_and_update();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.phase, SearchPhase::Searching);
    }

    let final_state = task.await.unwrap();
    assert_eq!(final_state.phase, SearchPhase::Ready);
    assert_eq!(rx.borrow().stations.len(), 3);
}

#[tokio::test]
async fn stale_results_stay_visible_while_searching() {
    let source = MockStationSource::new(three_records());
    let orch = Arc::new(orchestrator(source.clone()));
    orch.search(madrid()).await;

    source.set_delay(Some(Duration::from_millis(200))).await;
    source.set_records(vec![]).await;
    let mut rx = orch.subscribe();

    let task = {
        let orch = Arc::clone(&orch);
        tokio::spawn(async move { orch.search(madrid()).await })
    };

    rx.changed().await.unwrap();
    assert!(rx.borrow().is_loading());
    assert_eq!(rx.borrow().stations.len(), 3);

    let state = task.await.unwrap();
    assert!(state.stations.is_empty());
}

#[tokio::test]
async fn sort_by_distance_reranks_without_fetching() {
    let records = vec![
        record("Far", "1.100", "40.6", "-3.7"),
        record("Near", "1.500", "40.4170", "-3.7040"),
        record("Mid", "1.300", "40.5", "-3.7"),
    ];
    let source = MockStationSource::new(records);
    let orch = orchestrator(source.clone());

    let state = orch.search(madrid()).await;
    assert_eq!(names(&state.stations), vec!["Far", "Mid", "Near"]);

    let state = orch.set_sort_criterion(SortCriterion::Distance);
    assert_eq!(state.sort, SortCriterion::Distance);
    assert_eq!(names(&state.stations), vec!["Near", "Mid", "Far"]);

    let state = orch.set_sort_criterion(SortCriterion::Price);
    assert_eq!(names(&state.stations), vec!["Far", "Mid", "Near"]);

    assert_eq!(source.queries().await.len(), 1);
}

#[tokio::test]
async fn distance_sort_chosen_before_search_applies_to_results() {
    let records = vec![
        record("Far", "1.100", "40.6", "-3.7"),
        record("Near", "1.500", "40.4170", "-3.7040"),
    ];
    let orch = orchestrator(MockStationSource::new(records));

    orch.set_sort_criterion(SortCriterion::Distance);
    let state = orch.search(madrid()).await;

    assert_eq!(names(&state.stations), vec!["Near", "Far"]);
}

#[test]
fn sort_before_any_search_is_empty_and_safe() {
    let orch = orchestrator(MockStationSource::default());
    let state = orch.set_sort_criterion(SortCriterion::Distance);

    assert!(state.stations.is_empty());
    assert_eq!(state.phase, SearchPhase::Idle);
}

#[tokio::test]
async fn fuel_type_applies_to_next_search_and_persists() {
    let source = MockStationSource::new(three_records());
    let orch = orchestrator(source.clone());

    let state = orch.set_fuel_type(FuelType::Hydrogen);
    assert_eq!(state.fuel_type, FuelType::Hydrogen);
    assert!(source.queries().await.is_empty());
    assert_eq!(orch.preferences().fuel_type().as_deref(), Some("Hidrógeno"));

    orch.search(madrid()).await;
    assert_eq!(source.queries().await[0].fuel_type, FuelType::Hydrogen);
}

#[tokio::test]
async fn radius_applies_to_next_search_and_persists() {
    let source = MockStationSource::new(three_records());
    let orch = orchestrator(source.clone());

    let state = orch.set_radius("500");
    assert_eq!(state.radius_text, "500");
    assert_eq!(state.radius_km, 100.0);
    assert!(source.queries().await.is_empty());
    assert_eq!(orch.preferences().radius_text().as_deref(), Some("500"));

    orch.search(madrid()).await;
    orch.set_radius("0.05");
    orch.search(madrid()).await;
    orch.set_radius("abc");
    orch.search(madrid()).await;

    let radii: Vec<u32> = source
        .queries()
        .await
        .iter()
        .map(|q| q.radius_meters)
        .collect();
    assert_eq!(radii, vec![100_000, 100, 10_000]);
}

#[test]
fn radius_coercion_table() {
    let orch = orchestrator(MockStationSource::default());

    for (input, expected) in [
        ("", 10.0),
        ("abc", 10.0),
        ("0", 10.0),
        ("500", 100.0),
        ("0.05", 0.1),
        ("15", 15.0),
        ("25.5", 25.5),
    ] {
        assert_eq!(orch.set_radius(input).radius_km, expected, "input {input:?}");
    }
}

#[tokio::test]
async fn overlapping_searches_publish_last_resolved() {
    let slow = vec![record("Slow", "1.1", "40.4", "-3.7")];
    let fast = vec![record("Fast", "1.2", "40.4", "-3.7")];
    let orch = SearchOrchestrator::new(
        ScriptedSource::new(vec![
            (Duration::from_millis(150), Ok(slow)),
            (Duration::from_millis(10), Ok(fast)),
        ]),
        MemoryPreferences::new(),
        SearchConfig::default(),
    );

    let (first, second) = tokio::join!(orch.search(madrid()), orch.search(madrid()));

    assert_eq!(names(&second.stations), vec!["Fast"]);
    assert_eq!(names(&first.stations), vec!["Slow"]);
    assert_eq!(names(&orch.snapshot().stations), vec!["Slow"]);
}

#[tokio::test]
async fn subscribers_see_each_transition() {
    let orch = orchestrator(MockStationSource::new(three_records()));
    let mut rx = orch.subscribe();

    orch.set_fuel_type(FuelType::GasoilA);
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().fuel_type, FuelType::GasoilA);

    orch.search(madrid()).await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().stations.len(), 3);
}
