use thiserror::Error;

use super::config::ConfigError;
use crate::core::bonding::radii::RadiusTableError;
use crate::core::models::state::StateError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load bonding radii: {0}")]
    RadiusTable(#[from] RadiusTableError),

    #[error("Molecule '{name}' could not be featurized: {source}")]
    Molecule {
        name: String,
        #[source]
        source: StateError,
    },

    #[error("Input for molecule '{name}' is invalid: {reason}")]
    InvalidInput { name: String, reason: String },
}
