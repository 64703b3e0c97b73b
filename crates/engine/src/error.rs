use thiserror::Error;

use crate::core::{AssetError, PlatformError};

/// Why the engine could not start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{subsystem} could not initialize: {detail}")]
    Subsystem {
        subsystem: &'static str,
        detail: String,
    },
    #[error("failed to load {what}: {source}")]
    Asset {
        what: &'static str,
        #[source]
        source: AssetError,
    },
}

impl StartupError {
    pub fn asset(what: &'static str, source: AssetError) -> Self {
        StartupError::Asset { what, source }
    }

    /// Name of the failing subsystem or asset.
    pub fn subsystem(&self) -> &'static str {
        match self {
            StartupError::Subsystem { subsystem, .. } => *subsystem,
            StartupError::Asset { what, .. } => *what,
        }
    }
}

impl From<PlatformError> for StartupError {
    fn from(err: PlatformError) -> Self {
        StartupError::Subsystem {
            subsystem: err.subsystem,
            detail: err.detail,
        }
    }
}
