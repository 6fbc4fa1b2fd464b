use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that abort a run. Malformed lines never end up here.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write report to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to encode report for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl AnalyzeError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
