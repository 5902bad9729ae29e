//! Fixed-format result blocks for the batch CLI.

use std::path::Path;

use anyhow::bail;
use tandem_core::FileOutcome;

/// Print one file's outcome as a block: path, message, winner fields,
/// closing delimiter.
///
/// Winner fields that were never set render as `undefined`. An outcome
/// with no payload still prints its path and message lines, then fails
/// so the caller can log it and move on to the next file.
pub fn print_result_block(path: &Path, outcome: &FileOutcome) -> anyhow::Result<()> {
    println!("Result for:  {}", path.display());
    println!("Message:  {}", outcome.message);

    let Some(report) = &outcome.data else {
        bail!("no result payload: {}", outcome.message);
    };

    println!("Employee One ID# {}", field(&report.first_employee_id));
    println!("Employee Two ID# {}", field(&report.second_employee_id));
    println!("Project ID# {}", field(&report.project_id));
    match report.days {
        Some(days) => println!("Days worked# {days}"),
        None => println!("Days worked# undefined"),
    }
    println!("--------------------------");

    Ok(())
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("undefined")
}
