use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, rendering or saving the rehash chart
#[derive(Error, Debug)]
pub enum ChartError {
    /// The input CSV does not exist
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A required column is missing from the CSV header
    #[error("Required column '{column}' is not present in the CSV header")]
    Schema { column: String },

    /// A tracked field is missing or is not a non-negative integer
    #[error("Row {row}: column '{column}' has invalid value '{value}'")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    /// The CSV reader failed on a record
    #[error("Failed to read CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// The drawing backend failed
    #[error("Failed to render chart: {0}")]
    Render(String),

    /// The image could not be written to disk
    #[error("Failed to write image to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
