use thiserror::Error;

/// Validation failures raised while resolving job options.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionsError {
    #[error("Unsupported particle: {0}")]
    UnsupportedParticle(String),

    #[error("Unsupported sim: {0}")]
    UnsupportedSimEngine(String),

    #[error("Unsupported year: {0}")]
    UnsupportedYear(i64),

    #[error("Unsupported pt: {0}")]
    NonFinitePt(f64),
}

/// Errors produced while running a sweep over a CSV table of jobs.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row {row}: {source}")]
    Row { row: usize, source: OptionsError },
}
