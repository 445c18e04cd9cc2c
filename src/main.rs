//! Beacon Agent - periodic UDP status beacon
//!
//! After a startup delay, queries the device serial number and broadcasts
//! a one-line status datagram to a fixed host/port on every tick, until
//! SIGINT or SIGTERM triggers a graceful shutdown. Best-effort telemetry:
//! a failed send is logged and the next tick proceeds normally.

mod beacon;
mod config;
mod identity;
mod message;
mod sender;

use anyhow::{Context, Result};
use beacon::Beacon;
use config::BeaconConfig;
use identity::SystemIdentity;
use sender::DatagramSender;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().init();

    info!("Beacon Agent v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = BeaconConfig::load()
        .await
        .context("Failed to load configuration")?;

    let sender = DatagramSender::open(&config.host, config.port)
        .context("Failed to open UDP socket")?;

    let mut beacon = Beacon::new(config, sender, SystemIdentity::new());
    beacon.run(shutdown_signal()).await;

    info!("Beacon Agent shutdown complete");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM arrives.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term =
        signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Received SIGINT. Exiting..."),
        _ = term.recv() => info!("Received SIGTERM. Exiting..."),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install interrupt handler");
    info!("Received interrupt. Exiting...");
}
