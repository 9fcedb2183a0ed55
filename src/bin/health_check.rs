// src/bin/health_check.rs
use clap::Parser;
use ops_probes::cli::HealthCheckArgs;
use ops_probes::health::{probe, ReqwestProber};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = HealthCheckArgs::parse();
    ops_probes::init_tracing();

    let prober = match ReqwestProber::new(Duration::from_secs(args.timeout)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to set up HTTP client: {e:#}");
            return ExitCode::from(2);
        }
    };

    let report = probe(&args.url, &prober).await;

    if args.json {
        match serde_json::to_string(&report) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("failed to encode report as JSON: {e}"),
        }
    } else {
        println!("{}", report.line());
    }

    ExitCode::from(report.exit_code())
}
