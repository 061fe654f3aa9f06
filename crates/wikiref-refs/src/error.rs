//! Error types for reference operations.

use std::num::ParseIntError;

use thiserror::Error;
use wikiref_model::{EntityType, ModelError};

/// Errors that can occur during reference operations.
#[derive(Debug, Error)]
pub enum RefError {
    /// The index marker of an object name holds digits that do not fit an
    /// object number.
    #[error("invalid object number {digits:?} in object name {name:?}: {source}")]
    InvalidObjectNumber {
        name: String,
        digits: String,
        #[source]
        source: ParseIntError,
    },

    /// A reference component was omitted and no default value exists for it.
    #[error("no default value for {entity_type}")]
    MissingDefault { entity_type: EntityType },

    /// The resolved components do not form a valid reference.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Configuration could not be parsed or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for reference operations.
pub type Result<T> = std::result::Result<T, RefError>;
