use dotenvy::dotenv;
use pizzeria_restaurant_service::{DieselRepository, run_migrations};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers;
mod models;

use config::Config;
use handlers::{AppState, app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    run_migrations(&config.database_url)?;

    let state = AppState::new(DieselRepository::new(&config.database_url));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(
        database_url = %config.database_url,
        "Pizzeria API listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app(state)).await?;

    Ok(())
}
