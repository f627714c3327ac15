//! Loads a connector `info.yaml` and prints the resulting record.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connector_info::telemetry::tracing_support;
use connector_info::{ConnectorInfo, InfoLoader, LoadOutcome, LoadPolicy, LoaderConfig};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Parser)]
#[command(about = "Inspect a connector info.yaml descriptor")]
struct Args {
    /// Directory containing the descriptor.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Descriptor file name inside `--dir`.
    #[arg(long, default_value = connector_info::config::DEFAULT_FILE_NAME)]
    file_name: String,

    /// Fail on unreadable, malformed, or incomplete descriptors.
    #[arg(long)]
    strict: bool,

    /// Print the record as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    origin: String,
    info: &'a ConnectorInfo,
    outcome: &'a LoadOutcome,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_support::init(tracing_support::DEFAULT_FILTER)?;

    let policy = if args.strict {
        LoadPolicy::Strict
    } else {
        LoadPolicy::BestEffort
    };
    let config = LoaderConfig::builder(&args.dir)
        .file_name(args.file_name)
        .policy(policy)
        .build()?;
    let loader = InfoLoader::new(&config);

    let mut record = ConnectorInfo::default();
    let outcome = loader
        .load_with_policy(&mut record)
        .with_context(|| format!("loading {}", loader.origin()))?;

    if args.json {
        let report = Report {
            origin: loader.origin(),
            info: &record,
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!(origin = %loader.origin(), "connector: {record}");
    for field in connector_info::InfoField::ALL {
        println!("{:<10} {}", field.key(), record.get(field));
    }
    if !outcome.is_complete() {
        let missing: Vec<_> = outcome.missing().iter().map(|field| field.key()).collect();
        println!("missing    {}", missing.join(", "));
    }

    Ok(())
}
