//! Reelmatch server entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use reelmatch::Recommender;
use reelmatch_server::config::{load_dataset, resolve_dataset_path};
use reelmatch_server::http::{self, ApiState};

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Parser)]
#[command(
    name = "reelmatch-server",
    about = "HTTP recommendation service ranking a content catalog by cosine similarity",
    version
)]
struct Cli {
    /// Path to a JSON dataset file.
    #[arg(short, long)]
    dataset: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default).
    Serve {
        /// Listen address (host:port).
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: String,

        /// Path to a JSON dataset file.
        #[arg(short, long)]
        dataset: Option<String>,
    },

    /// Validate a dataset file.
    Validate,

    /// Print server and dataset facts as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   reelmatch-server completions bash > ~/.local/share/bash-completion/completions/reelmatch-server
    ///   reelmatch-server completions zsh > ~/.zfunc/_reelmatch-server
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve {
        addr: DEFAULT_ADDR.to_string(),
        dataset: None,
    }) {
        Commands::Serve { addr, dataset } => {
            let effective_dataset = dataset.or(cli.dataset);
            let path = resolve_dataset_path(effective_dataset.as_deref());
            let dataset = load_dataset(path.as_deref())?;
            let recommender = Recommender::new(dataset)?;

            tracing::info!(
                "Catalog: {} items, {} users, dimension {}",
                recommender.dataset().catalog_len(),
                recommender.dataset().user_count(),
                recommender.dataset().dimension().unwrap_or(0)
            );

            let state = Arc::new(ApiState { recommender });
            http::start(&addr, state).await?;
        }

        Commands::Validate => {
            let path = resolve_dataset_path(cli.dataset.as_deref());
            match load_dataset(path.as_deref()).and_then(Recommender::new) {
                Ok(recommender) => {
                    let dataset = recommender.dataset();
                    println!(
                        "Valid dataset: {}",
                        path.as_deref().unwrap_or("builtin fixture")
                    );
                    println!("  Users: {}", dataset.user_count());
                    println!("  Catalog: {}", dataset.catalog_len());
                    println!("  Dimension: {}", dataset.dimension().unwrap_or(0));
                }
                Err(e) => {
                    eprintln!("Invalid dataset: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Info => {
            let path = resolve_dataset_path(cli.dataset.as_deref());
            let dataset = load_dataset(path.as_deref())?;
            let info = serde_json::json!({
                "server": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
                "dataset": {
                    "source": path.as_deref().unwrap_or("builtin fixture"),
                    "users": dataset.user_count(),
                    "catalog": dataset.catalog_len(),
                    "dimension": dataset.dimension(),
                },
                "endpoints": ["POST /api/recommend", "GET /health"],
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "reelmatch-server", &mut std::io::stdout());
        }
    }

    Ok(())
}
