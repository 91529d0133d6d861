//! # Error Types
//!
//! This module defines error types used throughout the recibo crate.

use thiserror::Error;

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum ReciboError {
    /// Order payload present but failing to decode into the order model
    #[error("Malformed order: {0}")]
    MalformedOrder(String),

    /// Simulation artifact write/read failure
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Network, auth, or remote-service error from the print relay
    #[error("Print relay error: {0}")]
    Relay(String),

    /// Server startup errors (bind, listener)
    #[error("Server error: {0}")]
    Server(String),
}
