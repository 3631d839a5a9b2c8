use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Error: '{}' not found.", .0.display())]
    MissingTelemetryRoot(PathBuf),

    #[error("Invalid selection.")]
    InvalidSelection { input: String },

    #[error("Missing {column} column; cannot sort.")]
    MissingSortColumn { column: String },

    #[error("No data found; aborting.")]
    NoRunData { prefix: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;
