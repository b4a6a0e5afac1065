// ABOUTME: FlavorMind server binary entrypoint
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # FlavorMind Server Binary
//!
//! Starts the recipe service: external generator boundary, user data store,
//! bearer-token verification, and static frontend serving.

use anyhow::Result;
use clap::Parser;
use flavormind::{config::ServerConfig, logging, server, store::MemoryStore};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "flavormind-server")]
#[command(about = "FlavorMind recipe service - AI-backed recipe generation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting FlavorMind recipe service");
    info!("{}", config.summary());

    let store = Arc::new(MemoryStore::new());
    let resources = Arc::new(server::ServerResources::new(config, store));

    server::run(resources).await
}
