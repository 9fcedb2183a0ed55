// src/health/mod.rs
mod checker;
mod prober;

pub use checker::{classify, probe};
pub use prober::{HttpProber, ProbeFailure, ProbeResponse, ReqwestProber, PROBE_USER_AGENT};
