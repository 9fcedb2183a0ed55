// src/bin/backup_verify.rs
use clap::Parser;
use ops_probes::backup::{verify, FsScanner};
use ops_probes::cli::BackupVerifyArgs;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = BackupVerifyArgs::parse();
    ops_probes::init_tracing();

    let report = verify(&args.backup_dir, &FsScanner).await;

    if args.json {
        match serde_json::to_string(&report) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("failed to encode report as JSON: {e}"),
        }
    } else {
        for line in &report.lines {
            println!("{line}");
        }
    }

    ExitCode::from(report.exit_code())
}
