use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a [`LaunchTable`](super::model::LaunchTable) from a source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch dataset from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read dataset file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("dataset row {row} is malformed: {reason}")]
    Malformed { row: usize, reason: String },
    #[error("dataset is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
