//! # Recibo - Order Receipt Print Bridge
//!
//! Recibo accepts order payloads over HTTP and renders them into
//! printable receipts. It provides:
//!
//! - **Composition**: a stateful line writer producing styled receipt text
//! - **Simulation**: receipts written to a local artifact for inspection
//! - **Production**: ESC/POS jobs relayed to a printer via PrintNode
//! - **HTTP server**: a single `POST /print-receipt` endpoint
//!
//! ## Quick Start
//!
//! ```no_run
//! use recibo::{Config, order::Order, receipt};
//!
//! # fn example() -> Result<(), recibo::ReciboError> {
//! // Parse an order and compose its receipt
//! let order: Order = serde_json::from_str(recibo::order::SAMPLE_ORDER)
//!     .map_err(|e| recibo::ReciboError::MalformedOrder(e.to_string()))?;
//! let rendered = receipt::compose(&order);
//!
//! // Text for the simulation artifact, bytes for a physical printer
//! let text = rendered.to_text();
//! let bytes = rendered.to_bytes();
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`compose`] | Styled line writer and rendered receipt ops |
//! | [`receipt`] | Order → receipt composition |
//! | [`dispatch`] | Simulation artifact and PrintNode relay |
//! | [`server`] | HTTP endpoint |
//! | [`order`] | Order wire model |
//! | [`config`] | Environment configuration snapshot |
//! | [`error`] | Error types |

pub mod compose;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod order;
pub mod receipt;
pub mod server;

// Re-exports for convenience
pub use config::{Config, PrintMode};
pub use error::ReciboError;
pub use order::Order;
