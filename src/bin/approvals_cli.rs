//! Materialize approval records from a template catalog and print them as
//! JSON. This binary is the only place the system clock or filesystem is
//! read; the engine itself is pure.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use approval_desk::{load_catalog_from_str, ApprovalEngine};

const DEMO_CATALOG: &str = include_str!("../../demos/catalog.yaml");

#[derive(Parser)]
#[command(
    name = "approvals_cli",
    about = "Materialize approval request records from a template catalog"
)]
struct Args {
    /// Path to a catalog YAML file; defaults to the bundled demo catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Materialize records as of this instant (RFC 3339); defaults to now.
    #[arg(long)]
    as_of: Option<DateTime<Utc>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let yaml = match &args.catalog {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?,
        None => DEMO_CATALOG.to_string(),
    };
    let catalog = load_catalog_from_str(&yaml)?;

    let now = args.as_of.unwrap_or_else(Utc::now);
    let engine = ApprovalEngine::builtin();
    let records = engine.synthesize_all(&catalog, now);

    info!(
        entries = catalog.len(),
        records = records.len(),
        "materialized approval records"
    );
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
