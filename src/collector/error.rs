use std::path::PathBuf;
use thiserror::Error;

use super::Family;

/// Why a collector produced nothing for a round.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {family} data: {reason}")]
    Malformed { family: Family, reason: String },
}

impl CollectError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed<S: Into<String>>(family: Family, reason: S) -> Self {
        Self::Malformed {
            family,
            reason: reason.into(),
        }
    }
}
