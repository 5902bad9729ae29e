//! Batch CLI: process one or more assignment files and print the
//! longest-collaboration pair found in each.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::error;

mod display;

/// Find the two employees that worked together longest on a shared project.
#[derive(Debug, Parser)]
#[command(name = "tandem", version)]
struct Args {
    /// Assignment files to process (.txt or .csv).
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // One file failing must not stop the rest of the batch.
    for path in &args.files {
        if let Err(e) = process_one(path) {
            error!(path = %path.display(), "{e:#}");
        }
    }
}

fn process_one(path: &Path) -> anyhow::Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let outcome = tandem_core::process_file_text(&text, &extension_of(path), Utc::now())
        .with_context(|| format!("processing {}", path.display()))?;
    display::print_result_block(path, &outcome)
}

/// Everything after the final `.` of the path string; the whole name when
/// there is no dot, so extensionless paths fall through as unsupported.
fn extension_of(path: &Path) -> String {
    let name = path.to_string_lossy();
    name.rsplit('.').next().unwrap_or_default().to_string()
}
