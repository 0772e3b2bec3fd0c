use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rift_rewind::api::{build_router, state::AppState};
use rift_rewind::chart::JsonChartRenderer;
use rift_rewind::config::{AppConfig, MAX_MATCH_COUNT};
use rift_rewind::fetch::{HttpTransport, HttpTransportConfig};
use rift_rewind::narrative::backend::create_backend;
use rift_rewind::pipeline::{render_summary, AnalysisPipeline};

#[derive(Parser)]
#[command(name = "rift-rewind")]
#[command(about = "League of Legends match-history analytics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a player's recent matches
    Analyze {
        /// Riot ID display name
        #[arg(long)]
        name: String,

        /// Riot ID tag line (without '#')
        #[arg(long)]
        tag: String,

        /// Number of recent matches (defaults to the configured count)
        #[arg(long)]
        count: Option<usize>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roast a player's latest match
    Roast {
        /// Riot ID display name
        #[arg(long)]
        name: String,

        /// Riot ID tag line (without '#')
        #[arg(long)]
        tag: String,
    },

    /// Start the API server
    Serve {
        /// Bind address (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port number (defaults to the configured port)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(cli: &Cli) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn build_pipeline(config: &AppConfig) -> Result<AnalysisPipeline> {
    let api_key = std::env::var(&config.riot.api_key_env)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .with_context(|| format!("{} is not set", config.riot.api_key_env))?;

    let transport = HttpTransport::new(HttpTransportConfig::new(api_key.trim()))
        .context("Failed to build HTTP transport")?;
    let backend = create_backend(&config.ai);

    if let Some(backend) = &backend {
        match backend.health_check().await {
            Ok(true) => tracing::info!("AI backend '{}' is reachable", backend.name()),
            Ok(false) => tracing::warn!(
                "AI backend '{}' is not reachable, roasts will use the local fallback",
                backend.name()
            ),
            Err(e) => tracing::warn!("AI backend health check failed: {}", e),
        }
    }

    Ok(AnalysisPipeline::from_config(
        Arc::new(transport),
        config,
        backend,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    tracing::info!("Starting rift-rewind v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let pipeline = build_pipeline(&config).await?;

    match cli.command {
        Commands::Analyze {
            name,
            tag,
            count,
            json,
        } => {
            let count = count.unwrap_or(config.riot.default_match_count);
            ensure!(
                (1..=MAX_MATCH_COUNT).contains(&count),
                "--count must be between 1 and {}",
                MAX_MATCH_COUNT
            );

            let report = pipeline.analyze(&name, &tag, count).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_summary(&report));
            }
        }
        Commands::Roast { name, tag } => {
            let report = pipeline.roast(&name, &tag).await?;
            let perf = &report.performance;

            println!(
                "{} on {} ({}): {} {}",
                report.account.riot_id,
                perf.champion,
                perf.role,
                perf.kda_line(),
                perf.result_label()
            );
            println!();
            println!("{}", report.narrative.text);
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(pipeline, Arc::new(JsonChartRenderer), &config);
            let app = build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
