//! # Recibo CLI
//!
//! Command-line interface for the order receipt print bridge.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server (mode and credentials from the environment)
//! recibo serve
//!
//! # Start on a specific port
//! recibo serve --port 9000
//!
//! # Render the bundled sample order to stdout
//! recibo render --sample
//!
//! # Render an order JSON file to stdout
//! recibo render order.json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use recibo::{Config, ReciboError, order, receipt, server};

/// Recibo - order receipt print bridge
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Listen port (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compose a receipt from an order JSON file and print it to stdout
    Render {
        /// Path to an order JSON file
        file: Option<PathBuf>,

        /// Use the bundled sample order instead of a file
        #[arg(long)]
        sample: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ReciboError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let mut config = Config::from_env();
            if let Some(port) = port {
                config.port = port;
            }
            server::serve(config).await
        }
        Commands::Render { file, sample } => render(file, sample),
    }
}

/// Offline composition path: no network, no artifact writes.
fn render(file: Option<PathBuf>, sample: bool) -> Result<(), ReciboError> {
    let json = match (&file, sample) {
        (_, true) => order::SAMPLE_ORDER.to_string(),
        (Some(path), false) => std::fs::read_to_string(path)?,
        (None, false) => {
            return Err(ReciboError::MalformedOrder(
                "Provide an order JSON file or pass --sample".to_string(),
            ));
        }
    };

    let order: order::Order =
        serde_json::from_str(&json).map_err(|e| ReciboError::MalformedOrder(e.to_string()))?;

    println!("{}", receipt::compose(&order).to_text());
    Ok(())
}
