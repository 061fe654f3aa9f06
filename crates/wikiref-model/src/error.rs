use thiserror::Error;

use crate::entity::EntityType;

/// Errors produced by model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("empty {entity_type} name")]
    EmptyName { entity_type: EntityType },
}
