use fuel_finder::config::AppConfig;
use fuel_finder::preferences::FilePreferences;
use fuel_finder::search::{SearchConfig, SearchOrchestrator};
use fuel_finder::source::{HttpStationSource, MockStationSource, SourceConfig, StationBackend};
use fuel_finder::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fuel_finder=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");
    info!(environment = config.environment.name(), "starting fuel finder");

    // Pick the station source
    let backend = match &config.mock_data {
        Some(path) => {
            let source = MockStationSource::from_file(path).expect("Failed to load mock stations");
            info!(path = %path.display(), "serving mock station data");
            StationBackend::Mock(source)
        }
        None => {
            let source_config =
                SourceConfig::new(&config.base_url).with_timeout(config.timeout_secs);
            let source =
                HttpStationSource::new(source_config).expect("Failed to create station client");
            info!(base_url = %config.base_url, "using remote station API");
            StationBackend::Http(source)
        }
    };

    let preferences = FilePreferences::open(config.prefs_path.clone());
    let orchestrator = SearchOrchestrator::new(backend, preferences, SearchConfig::default());

    let app = create_router(AppState::new(orchestrator));

    let addr = config.listen_addr;
    info!("Fuel finder listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health          - Health check");
    info!("  GET  /api/fuel-types  - Selectable fuel types");
    info!("  GET  /api/state       - Current search state");
    info!("  POST /api/search      - Search around a position");
    info!("  PUT  /api/sort        - Change sort criterion");
    info!("  PUT  /api/fuel-type   - Change fuel type");
    info!("  PUT  /api/radius      - Change search radius");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
