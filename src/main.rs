//! HTTP server for the booking engine.
//!
//! Reads `BOOKING_ENGINE_CONFIG` (default `./config/default`),
//! `BOOKING_ENGINE_PORT` (default `3000`) and
//! `BOOKING_ENGINE_LAST_BOOKING_NUMBER` (default `0`), the last sequence
//! issued before this process started. Log levels follow `RUST_LOG`.

use std::{env, fmt::Display, str::FromStr};

use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use booking_engine::api::{AppState, create_router};
use booking_engine::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "./config/default";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_LAST_BOOKING_NUMBER: &str = "0";

struct Settings {
    config_path: String,
    port: u16,
    last_booking_number: u64,
}

impl Settings {
    fn load() -> Result<Self, String> {
        Ok(Self {
            config_path: try_load("BOOKING_ENGINE_CONFIG", DEFAULT_CONFIG_PATH)?,
            port: try_load("BOOKING_ENGINE_PORT", DEFAULT_PORT)?,
            last_booking_number: try_load(
                "BOOKING_ENGINE_LAST_BOOKING_NUMBER",
                DEFAULT_LAST_BOOKING_NUMBER,
            )?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, String>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| format!("Invalid {key} value: {e}"))
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutting down...");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let settings = Settings::load()?;
    let config = ConfigLoader::load(&settings.config_path)?;
    info!(
        catalog = %config.catalog().name,
        facilities = config.facilities().count(),
        "Loaded facility catalog from {}",
        settings.config_path
    );

    if settings.last_booking_number == 0 {
        warn!("BOOKING_ENGINE_LAST_BOOKING_NUMBER is 0, booking numbers restart at 1");
    } else {
        info!(
            last_booking_number = settings.last_booking_number,
            "Continuing booking number sequence"
        );
    }
    let state = AppState::with_last_booking_number(config, settings.last_booking_number);
    let app = create_router(state);

    let address = format!("0.0.0.0:{}", settings.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
