//! visage-api server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), seeds an
//! in-memory pod with the configured accounts, and serves the profile API
//! over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use visage_api::ProfileHandler;
use visage_store_mem::MemoryPod;

// ─── Configuration ───────────────────────────────────────────────────────────

/// An account seeded into the in-memory pod at startup.
#[derive(Deserialize, Clone)]
struct SeedAccount {
  id:     String,
  web_id: String,
  email:  Option<String>,
}

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  host: String,
  port: u16,
  #[serde(default)]
  accounts: Vec<SeedAccount>,
}

#[derive(Parser)]
#[command(author, version, about = "Visage profile server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("VISAGE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Seed the in-memory pod.
  let pod = MemoryPod::new();
  for account in &server_cfg.accounts {
    pod.link_web_id(&account.id, &account.web_id);
    if let Some(email) = &account.email {
      pod.add_credential(&account.id, email);
    }
  }

  let handler =
    Arc::new(ProfileHandler::new(pod.clone(), pod.clone(), pod.clone()));
  let app = visage_api::router(handler).layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
