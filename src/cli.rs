use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use leave_engine::calculation::{build_snapshot, snapshot_today};
use leave_engine::config::{ConfigLoader, LeavePolicy};
use leave_engine::error::EngineError;
use leave_engine::roster::{EmployeeSource, FileSource, Roster, SyntheticSource};
use leave_engine::telemetry::{self, TelemetryError};

use crate::server;

const DEFAULT_CONFIG_DIR: &str = "config/statutory";
const DEFAULT_EMPLOYEES: usize = 400;
const DEFAULT_SEED: u64 = 42;

/// Errors surfaced by the binary.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "leave-engine",
    about = "Serve and inspect annual leave snapshots for an employee roster",
    version
)]
struct Cli {
    /// Log level or filter directive, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print one employee's leave snapshot as JSON
    Snapshot(SnapshotArgs),
}

/// Where the policy and the roster come from.
#[derive(Args, Debug, Default)]
pub(crate) struct RosterArgs {
    /// Directory holding policy.yaml and withholding.yaml
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// JSON or YAML employee file; a synthetic roster is generated without it
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Size of the synthetic roster
    #[arg(long)]
    pub(crate) employees: Option<usize>,
    /// Seed of the synthetic roster
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Date the synthetic roster is generated as of (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub(crate) as_of: Option<NaiveDate>,
}

impl RosterArgs {
    pub(crate) fn load_policy(&self) -> Result<LeavePolicy, AppError> {
        let dir = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
        let loader = ConfigLoader::load(&dir)?;
        info!(config = %dir.display(), jurisdiction = %loader.policy().jurisdiction, "policy loaded");
        Ok(loader.into_policy())
    }

    pub(crate) fn load_roster(&self, policy: &LeavePolicy) -> Result<Roster, AppError> {
        let source: Box<dyn EmployeeSource> = match &self.data {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(
                SyntheticSource::new(
                    self.employees.unwrap_or(DEFAULT_EMPLOYEES),
                    self.seed.unwrap_or(DEFAULT_SEED),
                    self.as_of.unwrap_or_else(|| Local::now().date_naive()),
                )
                .with_policy(policy.clone()),
            ),
        };
        let roster = Roster::from_source(source.as_ref())?;
        info!(source = %source.name(), employees = roster.len(), "roster loaded");
        Ok(roster)
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Host interface for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,

    #[command(flatten)]
    pub(crate) roster: RosterArgs,
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    /// Employee identifier, e.g. EMP0001
    id: String,
    /// Reference date of the snapshot (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    #[command(flatten)]
    roster: RosterArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Snapshot(args) => print_snapshot(args),
    }
}

fn print_snapshot(args: SnapshotArgs) -> Result<(), AppError> {
    let policy = args.roster.load_policy()?;
    let roster = args.roster.load_roster(&policy)?;
    let employee = roster.get(&args.id)?;

    let snapshot = match args.date {
        Some(date) => build_snapshot(employee, date, &policy)?,
        None => snapshot_today(employee, &policy)?,
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
