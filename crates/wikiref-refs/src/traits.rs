//! Capabilities the object reference codec depends on.
//!
//! The codec never parses or prints document references itself. It is
//! handed a resolver and a serializer, which must agree with each other:
//! resolving a serialized reference yields the same reference. Resolvers
//! fill omitted components from an [`EntityReferenceValueProvider`].

use wikiref_model::{DocumentReference, EntityType};

use crate::error::Result;

/// Turns a string representation into a document reference.
///
/// Implementations must be thread-safe (`Send + Sync`), deterministic and
/// free of side effects for a given input.
pub trait DocumentReferenceResolver: Send + Sync {
    /// Resolve `representation`, filling omitted components with defaults.
    fn resolve(&self, representation: &str) -> Result<DocumentReference>;
}

/// Turns a document reference into its string representation.
pub trait EntityReferenceSerializer: Send + Sync {
    fn serialize(&self, reference: &DocumentReference) -> String;
}

/// Supplies the value used for a reference component that was not
/// specified.
///
/// Returns `None` when there is no sensible default for the entity type.
pub trait EntityReferenceValueProvider: Send + Sync {
    fn default_value(&self, entity_type: EntityType) -> Option<String>;
}
