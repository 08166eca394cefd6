//! Lay out a table described in JSON and print the result.
//!
//! Usage: `table-demo [document.json]` (reads stdin when no path is given).
//! Set `RUST_LOG=strata_table=trace` to see every cell measurement.

use std::io::Read;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use strata_table::demo::{self, DemoDocument};

fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let document: DemoDocument =
        serde_json::from_str(&input).context("failed to parse table document")?;
    tracing::info!(
        "laying out {} rows x {} columns",
        document.rows.len(),
        document.config.columns
    );

    let report = demo::run(&document)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
