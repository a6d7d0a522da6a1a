use mission_control::server::{config::Config, error::Error, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let launch_history_client = startup::build_launch_history_client(&config)?;

    startup::seed_database(&config, &db, &launch_history_client).await?;

    tracing::info!("Starting server");

    let router = startup::build_router(&config, AppState { db });
    startup::serve(&config, router).await
}
