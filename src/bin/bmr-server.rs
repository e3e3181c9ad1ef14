// ABOUTME: HTTP server binary for the energy calculator API
// ABOUTME: Loads environment configuration, applies CLI overrides, and serves until shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Pierre Energy Server Binary
//!
//! Starts the HTTP API exposing `POST /api/bmr`.

use anyhow::Result;
use clap::Parser;
use pierre_energy_server::{config::environment::ServerConfig, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "bmr-server")]
#[command(about = "Pierre Energy Server - BMR, TDEE and macro targets over HTTP")]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Pierre Energy Server");
    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
