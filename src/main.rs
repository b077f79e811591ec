//! nasadata-proxy binary.
//!
//! Run with:
//!   NASA_API_KEY=... PORT=5001 cargo run
//!
//! Try:
//!   curl 'http://localhost:5001/api/apod?date=2024-01-01'
//!   curl 'http://localhost:5001/api/mars-photos?camera=NAVCAM'
//!   curl 'http://localhost:5001/api/neo?start_date=2024-01-01&end_date=2024-01-02'

use std::sync::Arc;

use anyhow::Result;
use nasadata_proxy::{Config, NasaClient, Server, routes};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .init();

    if config.nasa_api_key == "DEMO_KEY" {
        info!("NASA_API_KEY not set, using the rate-limited DEMO_KEY");
    }

    let api = Arc::new(NasaClient::from_config(&config)?);

    info!(port = config.port, upstream = %config.nasa_api_base_url, "starting nasadata-proxy");

    Server::bind(&config.listen_addr())
        .await?
        .serve(routes::router(api))
        .await?;

    Ok(())
}
