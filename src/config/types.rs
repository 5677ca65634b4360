use crate::generator::COMPOSE_FILE_NAME;
use std::path::PathBuf;

/// Where the compose document is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(COMPOSE_FILE_NAME),
        }
    }
}
