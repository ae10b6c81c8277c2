use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on the length of a reported error, in characters
pub const MAX_ERROR_CHARS: usize = 200;

/// Raw outcome of one probe attempt, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The remote answered. `body` is only captured for error statuses.
    Responded { status: u16, body: Option<String> },
    /// No response was received at all
    TransportFailure(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub name: String,
    pub ok: bool,
    #[serde(rename = "status")]
    pub status_code: u16,
    #[serde(rename = "ms")]
    pub elapsed_millis: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn from_outcome(name: &str, outcome: ProbeOutcome, elapsed_millis: u64) -> Self {
        let (ok, status_code, error) = match outcome {
            ProbeOutcome::Responded { status, .. } if status < 400 => (true, status, None),
            ProbeOutcome::Responded { status, body } => {
                (false, status, Some(truncate_error(&body.unwrap_or_default())))
            }
            ProbeOutcome::TransportFailure(message) => (false, 0, Some(truncate_error(&message))),
        };

        Self {
            name: name.to_string(),
            ok,
            status_code,
            elapsed_millis,
            error,
        }
    }
}

/// Body returned by the trigger route
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProbeReport {
    pub timestamp: DateTime<Utc>,
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    /// Stamp a finished set of results with the current time
    pub fn new(results: Vec<ProbeResult>) -> Self {
        Self {
            timestamp: Utc::now(),
            results,
        }
    }

    pub fn all_ok(&self) -> bool {
        self.results.iter().all(|result| result.ok)
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|result| !result.ok).count()
    }
}

/// Cut on character boundaries so multi-byte text never splits
pub fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
