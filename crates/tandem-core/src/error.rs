use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// A row with fewer than 4 comma-separated fields aborts the whole
    /// processing call; it is never downgraded to a clean rejection.
    #[error("row {line} has fewer than 4 fields")]
    MalformedRow { line: usize },
}
