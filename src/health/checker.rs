// src/health/checker.rs
use super::prober::HttpProber;
use crate::report::ProbeReport;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// Success is any 2xx or 3xx status. A completed 4xx/5xx response still
/// counts as a failure.
pub fn classify(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Issue one GET against `url` and classify the outcome.
///
/// Elapsed time is measured end to end around the request, whether it
/// returned a response or an error.
pub async fn probe(url: &Url, prober: &dyn HttpProber) -> ProbeReport {
    let start = Instant::now();
    let result = prober.get(url).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(response) => {
            let success = classify(response.status);
            if success {
                debug!("Probe of {} returned {} in {}ms", url, response.status, elapsed_ms);
            } else {
                warn!(
                    "Probe of {} returned error status {} in {}ms",
                    url, response.status, elapsed_ms
                );
            }

            ProbeReport {
                target: url.to_string(),
                success,
                status: Some(response.status),
                elapsed_ms,
                message: format!("status={}", response.status),
            }
        }
        Err(failure) => {
            warn!("Probe of {} failed after {}ms: {}", url, elapsed_ms, failure);

            ProbeReport {
                target: url.to_string(),
                success: false,
                status: None,
                elapsed_ms,
                message: format!("error={}", failure),
            }
        }
    }
}
