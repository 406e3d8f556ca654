//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_geolocation` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Input validation and rendering of the request state
//!
//! All lookup logic is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use ip_geolocation::config::{Opt, API_KEY_ENV, INVALID_IP_MESSAGE};
use ip_geolocation::initialization::{init_client, init_logger_with};
use ip_geolocation::{
    is_valid_ipv4, render_state, Config, GeolocationController, L402Client, NoWallet,
    RequestState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so the API key
    // can live there instead of the shell environment
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    let ip = opt.ip.clone();
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if !is_valid_ipv4(&ip) {
        eprintln!("{INVALID_IP_MESSAGE}");
        process::exit(1);
    }
    if config.lookup.api_key.is_empty() {
        warn!("No API key configured (set {API_KEY_ENV} or pass --api-key)");
    }

    let client = init_client(&config)
        .await
        .context("Failed to initialize HTTP client")?;
    let fetcher = Arc::new(
        L402Client::new(client, Arc::new(NoWallet)).with_header_key(config.header_key.clone()),
    );
    let controller = GeolocationController::new(fetcher, config.lookup.clone());

    let mut updates = controller.subscribe();
    let renderer = tokio::spawn(async move {
        // Ends once the controller (and its sender) is dropped
        while updates.changed().await.is_ok() {
            let view = render_state(&updates.borrow_and_update());
            println!("{view}");
        }
    });

    controller.submit(&ip).await;
    let final_state = controller.state();
    drop(controller);
    renderer.await.context("Renderer task failed")?;

    match final_state {
        RequestState::Success(_) => Ok(()),
        _ => process::exit(1),
    }
}
