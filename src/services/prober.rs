use reqwest::Client as HttpClient;
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::errors::{PingerError, Result};
use crate::models::report::{ProbeOutcome, ProbeResult};
use crate::models::target::ProbeTarget;

/// Receives every finished probe for operator visibility
pub trait ProbeRecorder: Send + Sync {
    fn record(&self, result: &ProbeResult);
}

/// Emits one structured `tracing` event per probe
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRecorder;

impl ProbeRecorder for TracingRecorder {
    fn record(&self, result: &ProbeResult) {
        info!(
            target_name = %result.name,
            ok = result.ok,
            status = result.status_code,
            ms = result.elapsed_millis,
            "probe finished"
        );
    }
}

/// Issues one bounded read per target and normalizes the outcome
#[derive(Clone)]
pub struct Prober {
    client: HttpClient,
    recorder: Arc<dyn ProbeRecorder>,
}

impl Prober {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(timeout)
            .user_agent(format!("keepalive-pinger/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PingerError::Http)?;

        Ok(Self {
            client,
            recorder: Arc::new(TracingRecorder),
        })
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn ProbeRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Probe a single target. Every failure ends up in the returned result.
    pub async fn probe(&self, target: &ProbeTarget) -> ProbeResult {
        let url = target.query_url();
        debug!("Probing {} at {}", target.name, url);

        let start_time = Instant::now();
        let sent = self
            .client
            .get(&url)
            .header("apikey", &target.credential)
            .bearer_auth(&target.credential)
            .send()
            .await;
        let elapsed_millis = start_time.elapsed().as_millis() as u64;

        let outcome = match sent {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = if status >= 400 {
                    Some(
                        response
                            .text()
                            .await
                            .unwrap_or_else(|_| "unreadable response body".to_string()),
                    )
                } else {
                    None
                };
                ProbeOutcome::Responded { status, body }
            }
            Err(e) => ProbeOutcome::TransportFailure(describe_transport_error(&e)),
        };

        let result = ProbeResult::from_outcome(&target.name, outcome, elapsed_millis);
        self.recorder.record(&result);
        result
    }

    /// Probe targets one after another; results keep the input order
    pub async fn probe_all(&self, targets: &[ProbeTarget]) -> Vec<ProbeResult> {
        let mut results = Vec::with_capacity(targets.len());
        for target in targets {
            results.push(self.probe(target).await);
        }
        results
    }
}

/// Flatten the error chain; reqwest's top-level message rarely names the cause
fn describe_transport_error(err: &reqwest::Error) -> String {
    let mut message = if err.is_timeout() {
        format!("request timed out: {}", err)
    } else {
        err.to_string()
    };

    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
