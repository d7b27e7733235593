//! labsite: lab homepage server and static exporter
//!
//! Run with: cargo run -p labsite-web -- serve

use std::path::PathBuf;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use labsite_web::config::{normalize_base_path, Config};
use labsite_web::export::{export_site, ExportOptions};
use labsite_web::state::AppState;
use labsite_web::view::Links;

#[derive(Debug, Parser)]
#[command(name = "labsite", version, about = "Academic lab homepage")]
struct Cli {
    /// Path to labsite.toml (defaults to LABSITE_CONFIG, then ./labsite.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the homepage and JSON API
    Serve {
        /// Address to bind, e.g. 0.0.0.0:3000
        #[arg(long)]
        bind: Option<String>,
    },
    /// Write a static copy of the site
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
        /// URL prefix the site is hosted under, e.g. /prof-lab
        #[arg(long)]
        base_path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("labsite=debug,labsite_web=debug,labsite_common=debug,info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let state = AppState::from_config(&config)?;
    info!(
        "Catalog ready: {} publications, {} people, {} courses",
        state.catalog.publications.len(),
        state.catalog.people.len(),
        state.catalog.courses.len(),
    );

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let bind_addr = bind.unwrap_or_else(|| config.server.bind.clone());
            let router = labsite_web::router::build_router(state);

            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            info!("Homepage listening on http://{}", bind_addr);
            info!("   Page: http://{}/", bind_addr);
            info!("   API:  http://{}/api/publications", bind_addr);

            axum::serve(listener, router).await?;
        }
        Command::Export { out, base_path } => {
            let base_path = match base_path {
                Some(raw) => normalize_base_path(&raw)?,
                None => config.export.base_path.clone(),
            };
            let options = ExportOptions {
                out_dir: out.unwrap_or_else(|| config.export.out_dir.clone()),
                links: Links::new(base_path, config.export.trailing_slash),
            };
            let report = export_site(&state, &options, chrono::Local::now().year())?;
            info!("Static export complete: {} files in {}", report.files.len(), options.out_dir.display());
        }
    }

    Ok(())
}
