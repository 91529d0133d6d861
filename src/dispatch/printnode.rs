//! PrintNode relay client.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::error::ReciboError;

/// Title attached to every submitted job.
pub const JOB_TITLE: &str = "Order Receipt";

const CONTENT_TYPE_RAW_BASE64: &str = "raw_base64";

/// One print job as the relay accepts it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrintJob<'a> {
    printer_id: &'a str,
    title: &'a str,
    content_type: &'a str,
    content: String,
}

/// Relay-assigned job identifier. The relay returns a number; a string
/// is accepted too and echoed back to the client as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(i64),
    Text(String),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(n) => write!(f, "{n}"),
            JobId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PrintJobResponse {
    id: JobId,
}

/// Client for the PrintNode print-jobs endpoint.
///
/// Authenticates with HTTP Basic using the API key as username and an
/// empty password. The base URL is configurable so tests can point it at
/// a local stub.
pub struct PrintNodeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    printer_id: String,
}

impl PrintNodeClient {
    pub fn new(base_url: String, api_key: String, printer_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            printer_id,
        }
    }

    /// Submit raw printer bytes as one base64-encoded job and return the
    /// relay's job id.
    pub async fn submit(&self, data: &[u8]) -> Result<JobId, ReciboError> {
        let job = PrintJob {
            printer_id: &self.printer_id,
            title: JOB_TITLE,
            content_type: CONTENT_TYPE_RAW_BASE64,
            content: STANDARD.encode(data),
        };

        let url = format!("{}/printjobs", self.base_url);
        tracing::debug!(%url, printer_id = %self.printer_id, "submitting print job");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.api_key, Some(""))
            .json(&job)
            .send()
            .await
            .map_err(|e| ReciboError::Relay(format!("Request to PrintNode failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReciboError::Relay(format!(
                "PrintNode returned {status}: {body}"
            )));
        }

        let parsed: PrintJobResponse = response
            .json()
            .await
            .map_err(|e| ReciboError::Relay(format!("Invalid PrintNode response: {e}")))?;

        Ok(parsed.id)
    }
}
