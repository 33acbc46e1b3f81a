//! `agora` — Agora methods repository command-line interface.
//!
//! Provides three subcommands, each performing exactly one HTTP request:
//!
//! - **`push`** — create a method or configuration (`POST`).
//! - **`pull`** — fetch one snapshot by namespace, name, and snapshot id.
//! - **`list`** — list entities matching metadata filters.
//!
//! Every invocation selects the endpoint family with `--methods` or
//! `--configurations` and authenticates with `--auth <cookie>`. The
//! response JSON is pretty-printed to stdout.
//!
//! # Environment variables
//!
//! See [`config::CliConfig`] for the full list.

mod cli;
mod commands;
mod config;
mod editor;

use std::process;

use agora_client::{AgoraClient, Endpoint, HttpTransport};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::CliConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agora=info,agora_client=warn".into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    let endpoint = Endpoint::from_flags(cli.configurations, cli.methods)
        .unwrap_or_else(|e| fatal(&e.to_string()));
    let transport = HttpTransport::new(config.base_url.as_str())
        .unwrap_or_else(|e| fatal(&format!("failed to build HTTP client: {e}")));
    debug!(base_url = transport.base_url(), %endpoint, "using repository");
    let client = AgoraClient::new(transport, cli.auth);

    let response = commands::run(&client, &config, endpoint, cli.command)
        .unwrap_or_else(|e| fatal(&e.to_string()));

    match serde_json::to_string_pretty(&response) {
        Ok(text) => println!("{text}"),
        Err(e) => fatal(&format!("failed to render response: {e}")),
    }
}

/// Print an error message to stderr and exit with code 1.
fn fatal(msg: &str) -> ! {
    eprintln!("agora: {}", msg);
    process::exit(1);
}
