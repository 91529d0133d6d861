//! # Output Dispatcher
//!
//! Sends a composed receipt to its final destination. Simulation mode
//! overwrites a local artifact and returns its read-back text; production
//! mode base64-encodes the printer bytes and submits one job to the
//! PrintNode relay. One dispatch per request, no retries, no
//! deduplication.

mod printnode;
mod simulation;

pub use printnode::{JobId, PrintNodeClient};
pub use simulation::SimulationLog;

use crate::compose::RenderedReceipt;
use crate::config::{Config, PrintMode};
use crate::error::ReciboError;

/// Result of a successful dispatch, mode-specific.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    /// Simulation: the artifact's full text, read back after the write.
    Simulated { receipt: String },
    /// Production: the relay-assigned job id.
    Printed { job_id: JobId },
}

/// Branches on the configured mode and produces the externally visible
/// effect for a composed receipt.
pub struct Dispatcher {
    mode: PrintMode,
    simulation: SimulationLog,
    printnode: PrintNodeClient,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: config.mode,
            simulation: SimulationLog::new(config.simulation_log_file.clone()),
            printnode: PrintNodeClient::new(
                config.printnode_api_url.clone(),
                config.printnode_api_key.clone(),
                config.printer_id.clone(),
            ),
        }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// Send the receipt out. Any storage or relay failure is fatal to
    /// the request; nothing is retried.
    pub async fn dispatch(&self, receipt: &RenderedReceipt) -> Result<DispatchOutcome, ReciboError> {
        match self.mode {
            PrintMode::Simulation => {
                let text = self.simulation.write_and_read_back(&receipt.to_text()).await?;
                Ok(DispatchOutcome::Simulated { receipt: text })
            }
            PrintMode::Production => {
                let job_id = self.printnode.submit(&receipt.to_bytes()).await?;
                Ok(DispatchOutcome::Printed { job_id })
            }
        }
    }
}
