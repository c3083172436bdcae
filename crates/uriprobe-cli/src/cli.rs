use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use uriprobe_core::{config, probe};

/// Top-level CLI for the uriprobe capability checker.
#[derive(Debug, Parser)]
#[command(name = "uriprobe", version)]
#[command(
    about = "Check whether the linked SQLite driver supports URI-style connection strings",
    long_about = None
)]
pub struct Cli {
    /// Scratch database filename to probe with (default: config, then db.sqlite3).
    #[arg(long, value_name = "FILENAME")]
    pub db: Option<PathBuf>,

    /// Keep the scratch database file after the probe instead of removing it.
    #[arg(long)]
    pub keep_db: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init().context("failed to load configuration")?;
        tracing::debug!("loaded config: {:?}", cfg);

        // Flag beats config beats built-in default.
        let db_path = self
            .db
            .unwrap_or_else(|| PathBuf::from(cfg.db_filename()));
        let keep_db = self.keep_db || cfg.keep_db;

        let outcome = probe::run(&db_path, keep_db)
            .with_context(|| format!("uri probe failed for {}", db_path.display()))?;
        tracing::info!(outcome = %outcome, db = %db_path.display(), "probe finished");

        // The one-line stdout contract.
        println!("{}", outcome.report_line());
        Ok(())
    }
}
