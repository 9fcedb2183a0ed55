// src/report.rs
use serde::Serialize;

/// Outcome of one backup verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyOutcome {
    Pass,
    DirectoryNotFound,
    NoArchivesFound,
    EmptyArchive,
}

impl VerifyOutcome {
    /// Exit code contract consumed by the invoking scheduler.
    pub fn exit_code(&self) -> u8 {
        match self {
            VerifyOutcome::Pass => 0,
            VerifyOutcome::DirectoryNotFound => 1,
            VerifyOutcome::NoArchivesFound => 2,
            VerifyOutcome::EmptyArchive => 3,
        }
    }
}

/// Result of a backup verification run: the outcome plus the stdout lines
/// describing it, ending with a PASS/FAIL marker line.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub outcome: VerifyOutcome,
    pub lines: Vec<String>,
}

impl VerifyReport {
    pub fn exit_code(&self) -> u8 {
        self.outcome.exit_code()
    }
}

/// Result of a single HTTP probe.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub target: String,
    pub success: bool,
    pub status: Option<u16>,
    pub elapsed_ms: u64,
    pub message: String,
}

impl ProbeReport {
    /// `0` on success, `2` on any failure (error status, timeout, transport
    /// error). There is no code `1` here; that slot belongs to usage errors
    /// surfaced by the argument parser.
    pub fn exit_code(&self) -> u8 {
        if self.success {
            0
        } else {
            2
        }
    }

    /// The single stdout result line.
    pub fn line(&self) -> String {
        let marker = if self.success { "OK" } else { "FAIL" };
        format!(
            "{}: {} | {} | time={}ms",
            marker, self.target, self.message, self.elapsed_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_outcomes_map_to_distinct_exit_codes() {
        assert_eq!(VerifyOutcome::Pass.exit_code(), 0);
        assert_eq!(VerifyOutcome::DirectoryNotFound.exit_code(), 1);
        assert_eq!(VerifyOutcome::NoArchivesFound.exit_code(), 2);
        assert_eq!(VerifyOutcome::EmptyArchive.exit_code(), 3);
    }

    #[test]
    fn probe_line_carries_marker_target_and_elapsed() {
        let report = ProbeReport {
            target: "http://localhost:8080/health".to_string(),
            success: true,
            status: Some(200),
            elapsed_ms: 42,
            message: "status=200".to_string(),
        };
        assert_eq!(
            report.line(),
            "OK: http://localhost:8080/health | status=200 | time=42ms"
        );

        let report = ProbeReport {
            target: "http://localhost:8080/health".to_string(),
            success: false,
            status: None,
            elapsed_ms: 7,
            message: "error=connection refused".to_string(),
        };
        assert!(report.line().starts_with("FAIL: "));
        assert!(report.line().contains("error=connection refused"));
        assert_eq!(report.exit_code(), 2);
    }

    #[test]
    fn reports_serialize_for_json_output() {
        let report = ProbeReport {
            target: "http://localhost/".to_string(),
            success: false,
            status: Some(503),
            elapsed_ms: 10,
            message: "status=503".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"status\":503"));
    }
}
