//! Portal Entry Point
//!
//! Builds the session context once, restores any saved session, runs one
//! subcommand and shuts the context down.
//! Uses `anyhow` for startup errors; command failures are reported through
//! `kernel::error::AppError` (message plus suggested action).

mod cli;
mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use auth::{AuthConfig, HttpAuthApi, MissingTokenPolicy, PersistentSessionRepository, SessionContext};
use clap::Parser;
use directories::ProjectDirs;
use platform::storage::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so command output stays clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,auth=info,intake=info,platform=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AuthConfig {
        missing_token: if cli.synthesize_missing_token {
            MissingTokenPolicy::Synthesize
        } else {
            MissingTokenPolicy::Reject
        },
        request_timeout: cli.timeout(),
        ..AuthConfig::with_api_base_url(&cli.api_base_url)
    };

    let (data_dir, runtime_dir) = store_dirs(&cli)?;
    tracing::debug!(
        data_dir = %data_dir.display(),
        runtime_dir = %runtime_dir.display(),
        "Session stores"
    );

    let api = HttpAuthApi::new(&config.api_base_url, config.request_timeout)
        .context("Invalid API base URL")?;
    let store = PersistentSessionRepository::new(
        FileStore::new(data_dir),
        FileStore::new(runtime_dir),
        &config,
    );
    let ctx = SessionContext::new(Arc::new(api), Arc::new(store), Arc::new(config));

    // A failed restore leaves the session anonymous; commands still run
    if cli.command.needs_session() {
        match ctx.initialize().await {
            Ok(output) => tracing::info!(source = %output.source, "Session restored"),
            Err(e) => tracing::warn!(error = %e, "Session restore failed, continuing signed out"),
        }
    }

    let result = commands::dispatch(&ctx, cli.command).await;
    ctx.shutdown();

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message());
            if let Some(action) = err.action() {
                eprintln!("  {action}");
            } else if err.is_server_error() {
                eprintln!("  Try again later");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Durable and volatile store directories, CLI/env first
fn store_dirs(cli: &Cli) -> anyhow::Result<(PathBuf, PathBuf)> {
    let project = ProjectDirs::from("ng", "nhf", "portal");

    let data_dir = match (&cli.data_dir, &project) {
        (Some(dir), _) => dir.clone(),
        (None, Some(project)) => project.data_dir().to_path_buf(),
        (None, None) => anyhow::bail!("Could not determine a data directory; set PORTAL_DATA_DIR"),
    };

    let runtime_dir = cli
        .runtime_dir
        .clone()
        .or_else(|| {
            project
                .as_ref()
                .and_then(|project| project.runtime_dir().map(|dir| dir.to_path_buf()))
        })
        .unwrap_or_else(|| std::env::temp_dir().join("nhf-portal"));

    Ok((data_dir, runtime_dir))
}
