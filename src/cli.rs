// src/cli.rs
use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "backup-verify",
    version,
    about = "Verify that the latest backup archive in a directory exists and is non-empty"
)]
pub struct BackupVerifyArgs {
    /// Backup directory to inspect, e.g. ./backups
    #[arg(long, value_name = "DIR")]
    pub backup_dir: PathBuf,

    /// Emit the report as a single JSON line instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "health-check",
    version,
    about = "Run a single HTTP health probe against a URL"
)]
pub struct HealthCheckArgs {
    /// URL to probe, e.g. http://localhost:8080/health
    #[arg(long, value_name = "URL")]
    pub url: Url,

    /// Request timeout in whole seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Emit the report as a single JSON line instead of text
    #[arg(long)]
    pub json: bool,
}
