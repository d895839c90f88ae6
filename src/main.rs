use std::path::PathBuf;

use anyhow::Context;
use axum::extract::FromRef;
use clap::{Parser, Subcommand};

mod commands;

mod config;
use config::Config;

mod error;
pub(crate) use error::{ApiError, ApiResult};

mod models;
use models::Paste;

mod store;
use store::PasteStore;

pub(crate) mod types;

/// Pastes seeded into the store at start-up.
const SEED_PASTES: &str = include_str!("../assets/pastes.json");

/// An in-memory pastebin API.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
}

#[derive(Clone, FromRef)]
pub(crate) struct AppState {
    pub(crate) config: Config,
    pub(crate) store: PasteStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config).context("failed to read config")?;

    let seed: Vec<Paste> =
        serde_json::from_str(SEED_PASTES).context("failed to parse seed pastes")?;
    let store = PasteStore::with_pastes(seed);

    let state = AppState { config, store };

    match cli.command {
        Command::Serve => commands::serve::run(state).await,
    }
}
