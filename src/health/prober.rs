// src/health/prober.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Identifying header sent with every probe request.
pub const PROBE_USER_AGENT: &str = concat!("ops-probes/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct ProbeResponse {
    pub status: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeFailure {
    #[error("request timed out")]
    TimedOut,

    #[error("{0}")]
    Request(String),
}

/// Performs one HTTP GET with a bounded wait.
#[async_trait]
pub trait HttpProber: Send + Sync {
    async fn get(&self, url: &Url) -> Result<ProbeResponse, ProbeFailure>;
}

/// Live prober backed by `reqwest`. Redirect handling is the client's
/// default; one-shot use, no connection reuse across invocations.
pub struct ReqwestProber {
    client: Client,
    timeout: Duration,
}

impl ReqwestProber {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(PROBE_USER_AGENT)
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl HttpProber for ReqwestProber {
    async fn get(&self, url: &Url) -> Result<ProbeResponse, ProbeFailure> {
        // The client enforces its own deadline; the outer timeout bounds the
        // whole send in case the connector stalls before the clock starts.
        let result = timeout(self.timeout, self.client.get(url.as_str()).send()).await;

        match result {
            Ok(Ok(response)) => Ok(ProbeResponse {
                status: response.status().as_u16(),
            }),
            Ok(Err(e)) if e.is_timeout() => Err(ProbeFailure::TimedOut),
            Ok(Err(e)) => Err(ProbeFailure::Request(e.to_string())),
            Err(_) => Err(ProbeFailure::TimedOut),
        }
    }
}
