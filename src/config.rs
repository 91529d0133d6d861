//! # Runtime Configuration
//!
//! Process-wide configuration snapshot, loaded once at startup from the
//! environment and passed explicitly to the server and dispatcher. Nothing
//! reads the environment after startup.

use std::path::PathBuf;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Default print relay base URL.
pub const DEFAULT_PRINTNODE_API_URL: &str = "https://api.printnode.com";

/// Default simulation artifact path, relative to the working directory.
pub const DEFAULT_SIMULATION_LOG_FILE: &str = "printer_simulation.log";

/// Output mode for composed receipts.
///
/// Selected once at startup; there is no per-request mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Write the receipt text to a local artifact instead of a printer.
    Simulation,
    /// Relay the receipt to a physical printer via PrintNode.
    Production,
}

impl PrintMode {
    /// Mode label carried in failure responses.
    pub fn label(&self) -> &'static str {
        match self {
            PrintMode::Simulation => "SIMULATION",
            PrintMode::Production => "PRODUCTION",
        }
    }
}

/// Immutable configuration snapshot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output mode. `SIMULATION_MODE` selects simulation only when its
    /// value is exactly `"true"`.
    pub mode: PrintMode,

    /// PrintNode API key (`PRINTNODE_API_KEY`). Used only in production
    /// mode; empty is accepted and will fail at dispatch time.
    pub printnode_api_key: String,

    /// Target printer id at PrintNode (`PRINTER_ID`).
    pub printer_id: String,

    /// HTTP listen port (`PORT`).
    pub port: u16,

    /// PrintNode base URL (`PRINTNODE_API_URL`). Tests point this at a
    /// local stub.
    pub printnode_api_url: String,

    /// Simulation artifact path (`SIMULATION_LOG_FILE`).
    pub simulation_log_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let simulation = std::env::var("SIMULATION_MODE").is_ok_and(|v| v == "true");

        Self {
            mode: if simulation {
                PrintMode::Simulation
            } else {
                PrintMode::Production
            },
            printnode_api_key: std::env::var("PRINTNODE_API_KEY").unwrap_or_default(),
            printer_id: std::env::var("PRINTER_ID").unwrap_or_default(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            printnode_api_url: std::env::var("PRINTNODE_API_URL")
                .unwrap_or_else(|_| DEFAULT_PRINTNODE_API_URL.to_string()),
            simulation_log_file: std::env::var("SIMULATION_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SIMULATION_LOG_FILE)),
        }
    }
}
