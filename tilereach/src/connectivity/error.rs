//! Errors surfaced by the connectivity map.

use thiserror::Error;

use crate::hierarchy::LevelId;
use crate::universe::UniverseError;

/// Errors that can occur building or exporting a connectivity map.
///
/// Lookups of absent tiles or levels are not errors; they resolve to color 0
/// or an empty set.
#[derive(Debug, Error)]
pub enum ConnectivityError {
    /// The tile universe could not be read. Fatal at construction.
    #[error("Failed to read tile universe: {0}")]
    Configuration(#[from] UniverseError),

    /// Requested level is not part of the hierarchy.
    #[error("hierarchy level not found: {level} (maximum is {max})")]
    InvalidLevel { level: String, max: LevelId },

    #[error("Failed to serialize export: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConnectivityError {
    pub(crate) fn invalid_level(level: impl ToString, max: LevelId) -> Self {
        ConnectivityError::InvalidLevel {
            level: level.to_string(),
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_level_display() {
        let err = ConnectivityError::invalid_level(4, LevelId::Transit);
        assert_eq!(
            err.to_string(),
            "hierarchy level not found: 4 (maximum is transit)"
        );
    }

    #[test]
    fn test_configuration_from_universe_error() {
        let err: ConnectivityError = UniverseError::NotFound(PathBuf::from("/tiles")).into();
        assert!(matches!(err, ConnectivityError::Configuration(_)));
        assert!(err.to_string().contains("/tiles"));
    }
}
