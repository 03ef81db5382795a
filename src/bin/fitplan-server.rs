// ABOUTME: Server binary for the FitPlan fitness planning service
// ABOUTME: Loads config, initializes logging, builds resources, and serves HTTP until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # FitPlan Server Binary
//!
//! Starts the HTTP surface (`/health`, `/api/chat`, `/api/agents`) backed by
//! the Body Agent and the three planning tools.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use fitplan_core::constants::{env_config, routes};
use fitplan_server::{
    config::ServerConfig, logging, resources::ServerResources, server::HttpServer,
};
use tracing::{error, info, warn};

/// Command-line arguments; everything else comes from the environment
#[derive(Parser)]
#[command(name = "fitplan-server")]
#[command(about = "FitPlan - fitness and nutrition planning server with an LLM agent")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_for_server(&config)?;

    info!("Starting FitPlan server");
    info!("{}", config.summary());
    if config.llm.api_key.is_none() {
        warn!(
            "{} is not set; chat requests will fail until it is configured",
            env_config::OPENAI_API_KEY
        );
    }

    let (host, port) = (config.host.clone(), config.http_port);
    let resources = Arc::new(ServerResources::new(config)?);
    info!(
        "Registered agents: {:?}, tools: {:?}",
        resources.agents.names(),
        resources.tools.tool_names()
    );
    display_available_endpoints(&host, port);

    if let Err(e) = HttpServer::new(resources).run(&host, port).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(host: &str, port: u16) {
    let base = format!("http://{host}:{port}");
    info!("=== Available API Endpoints ===");
    info!("  GET  {base}{}", routes::HEALTH);
    info!("  POST {base}{}", routes::CHAT);
    info!("  GET  {base}{}", routes::AGENTS);
}
