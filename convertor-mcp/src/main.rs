//! Convertor MCP Server
//!
//! Line-delimited JSON-RPC over stdio. Each process holds one session.
//!
//! Tools:
//! - convert, to_base, compatible, formula: the conversion engine
//! - list_categories, search_units, unit_info, format_unit: the unit catalog
//! - convert_and_record, history, clear_history: conversion history
//! - toggle_favorite, favorites: favorite unit pairs
//! - set_theme, chart: chart data for the last conversion
//! - help: documentation for any of the above

mod config;
mod server;

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use crate::config::ServerConfig;
use crate::server::{Server, PROTOCOL_VERSION, SERVER_VERSION};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries the protocol; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "convertor MCP server starting");

    let mut server = Server::new(ServerConfig::from_env());

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    info!(theme = %server.session().theme(), "server ready, waiting for requests");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("client disconnected");
                break;
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(bytes = line.len(), "received");

        let Some(response) = server.handle_line(line) else {
            continue;
        };

        let mut payload = match serde_json::to_vec(&response) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                continue;
            }
        };
        payload.push(b'\n');

        if let Err(e) = stdout.write_all(&payload).await {
            error!(error = %e, "error writing response");
            break;
        }
        if let Err(e) = stdout.flush().await {
            error!(error = %e, "error flushing stdout");
            break;
        }
    }

    info!("server shutting down");
}
