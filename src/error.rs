use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    /// Any condition that stops the compose file from being written in full.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to print the generation report: {0}")]
    Report(#[source] std::io::Error),
}

impl EmitError {
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EmitError>;
