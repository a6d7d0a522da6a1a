//! Router assembly, state wiring and server startup.

use axum::{
    http::{header, Method},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    provider::launch_history::LaunchHistoryClient,
    router,
    service::{
        launch::{LaunchService, SeedOutcome},
        planet::PlanetService,
    },
};

static USER_AGENT: &str = concat!("MissionControl/", env!("CARGO_PKG_VERSION"));
static DEFAULT_LOG_FILTER: &str = "mission_control=info,tower_http=info";

/// Install the global tracing subscriber, filtered by `RUST_LOG`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the client for the launch history provider
pub fn build_launch_history_client(config: &Config) -> Result<LaunchHistoryClient, Error> {
    let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    Ok(LaunchHistoryClient::new(http, &config.launch_api_url))
}

/// Load the planet catalog, then import launch history if it isn't stored yet
pub async fn seed_database(
    config: &Config,
    db: &DatabaseConnection,
    launch_history_client: &LaunchHistoryClient,
) -> Result<(), Error> {
    let planet_service = PlanetService::new(db);
    let launch_service = LaunchService::new(db);

    planet_service
        .load_catalog_from_path(&config.planets_data_path)
        .await?;

    if let SeedOutcome::Imported(count) = launch_service
        .ensure_seeded(launch_history_client)
        .await?
    {
        tracing::info!("Launch data loaded, {} launches stored", count);
    }

    Ok(())
}

/// Build the application router
///
/// Serves the API under `/v1`. Any other path is served from the public directory, with
/// unknown files falling back to its `index.html` for client-side routing.
pub fn build_router(config: &Config, state: AppState) -> Router {
    let index = config.public_dir.join("index.html");
    let client_app = ServeDir::new(&config.public_dir).fallback(ServeFile::new(index));

    let cors = CorsLayer::new()
        .allow_origin(config.client_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    router::routes()
        .with_state(state)
        .fallback_service(client_app)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind the listener and serve requests until the process exits
pub async fn serve(config: &Config, router: Router) -> Result<(), Error> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Listening on port {}", config.port);

    axum::serve(listener, router).await?;

    Ok(())
}
