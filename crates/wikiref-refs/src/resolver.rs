//! String resolver and serializer for document references.
//!
//! [`StringReferenceResolver`] reads the `wiki:space.page` syntax of
//! [`wikiref_model::syntax`] and fills omitted components from an
//! [`EntityReferenceValueProvider`]. [`StringReferenceSerializer`] writes
//! the same syntax, either in full or without the wiki. The two agree:
//! resolving a serialized reference yields the original reference.

use std::sync::Arc;

use tracing::trace;
use wikiref_model::syntax::parse;
use wikiref_model::{DocumentReference, EntityType};

use crate::error::{RefError, Result};
use crate::traits::{
    DocumentReferenceResolver, EntityReferenceSerializer, EntityReferenceValueProvider,
};

/// Resolves string references against a value provider.
#[derive(Clone)]
pub struct StringReferenceResolver {
    defaults: Arc<dyn EntityReferenceValueProvider>,
}

impl StringReferenceResolver {
    /// Create a resolver that fills omitted components from `defaults`.
    pub fn new(defaults: Arc<dyn EntityReferenceValueProvider>) -> Self {
        Self { defaults }
    }

    fn component(&self, value: Option<String>, entity_type: EntityType) -> Result<String> {
        if let Some(value) = value {
            return Ok(value);
        }
        let value = self
            .defaults
            .default_value(entity_type)
            .filter(|v| !v.is_empty())
            .ok_or(RefError::MissingDefault { entity_type })?;
        trace!(%entity_type, %value, "using default reference component");
        Ok(value)
    }
}

impl std::fmt::Debug for StringReferenceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringReferenceResolver").finish_non_exhaustive()
    }
}

impl DocumentReferenceResolver for StringReferenceResolver {
    fn resolve(&self, representation: &str) -> Result<DocumentReference> {
        let parsed = parse(representation);
        let wiki = self.component(parsed.wiki, EntityType::Wiki)?;
        let space = self.component(parsed.space, EntityType::Space)?;
        let page = self.component(parsed.page, EntityType::Document)?;
        Ok(DocumentReference::new(wiki, space, page)?)
    }
}

/// How much of a reference [`StringReferenceSerializer`] writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SerializerMode {
    /// `wiki:space.page`
    #[default]
    Full,
    /// `space.page`
    Local,
}

/// Writes document references in the escaped string syntax.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StringReferenceSerializer {
    mode: SerializerMode,
}

impl StringReferenceSerializer {
    pub fn new(mode: SerializerMode) -> Self {
        Self { mode }
    }

    /// A serializer writing `wiki:space.page`.
    pub fn full() -> Self {
        Self::new(SerializerMode::Full)
    }

    /// A serializer writing `space.page`.
    ///
    /// Only pair it with a resolver whose default wiki is the wiki of the
    /// serialized references.
    pub fn local() -> Self {
        Self::new(SerializerMode::Local)
    }

    pub fn mode(&self) -> SerializerMode {
        self.mode
    }
}

impl EntityReferenceSerializer for StringReferenceSerializer {
    fn serialize(&self, reference: &DocumentReference) -> String {
        match self.mode {
            SerializerMode::Full => reference.full_name(),
            SerializerMode::Local => reference.local_name(),
        }
    }
}
