//! Core logic for Tandem: parse employee project assignments from
//! delimited text and find the pair of employees that worked together
//! longest on a shared project.

pub mod assignment;
pub mod error;
pub mod overlap;
pub mod process;

pub use assignment::{Assignment, build_assignments};
pub use error::ScanError;
pub use overlap::{PairReport, longest_period, worked_together};
pub use process::{FileOutcome, process_file_text};
