use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::EntityType;
use crate::error::ModelError;
use crate::syntax::{escape_into, SPACE_SEPARATOR, WIKI_SEPARATOR};

/// Fully qualified reference to a wiki document.
///
/// Every component is non-empty. The `Display` form is the canonical
/// escaped string `wiki:space.page`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawDocumentReference")]
pub struct DocumentReference {
    wiki: String,
    space: String,
    page: String,
}

/// Reference to the document defining a class of objects
/// (e.g. `xwiki:XWiki.Mail`).
pub type ClassReference = DocumentReference;

#[derive(Deserialize)]
struct RawDocumentReference {
    wiki: String,
    space: String,
    page: String,
}

impl TryFrom<RawDocumentReference> for DocumentReference {
    type Error = ModelError;

    fn try_from(raw: RawDocumentReference) -> Result<Self, Self::Error> {
        Self::new(raw.wiki, raw.space, raw.page)
    }
}

fn non_empty(value: impl Into<String>, entity_type: EntityType) -> Result<String, ModelError> {
    let value = value.into();
    if value.is_empty() {
        return Err(ModelError::EmptyName { entity_type });
    }
    Ok(value)
}

impl DocumentReference {
    /// Create a reference from its unescaped components.
    pub fn new(
        wiki: impl Into<String>,
        space: impl Into<String>,
        page: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            wiki: non_empty(wiki, EntityType::Wiki)?,
            space: non_empty(space, EntityType::Space)?,
            page: non_empty(page, EntityType::Document)?,
        })
    }

    pub fn wiki(&self) -> &str {
        &self.wiki
    }

    pub fn space(&self) -> &str {
        &self.space
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    /// The component naming the given entity type, if this reference has one.
    pub fn name(&self, entity_type: EntityType) -> Option<&str> {
        match entity_type {
            EntityType::Wiki => Some(&self.wiki),
            EntityType::Space => Some(&self.space),
            EntityType::Document => Some(&self.page),
            EntityType::Object => None,
        }
    }

    /// The same document in another wiki.
    pub fn with_wiki(&self, wiki: impl Into<String>) -> Result<Self, ModelError> {
        Ok(Self {
            wiki: non_empty(wiki, EntityType::Wiki)?,
            ..self.clone()
        })
    }

    /// Escaped `space.page` form, without the wiki.
    pub fn local_name(&self) -> String {
        let mut out = String::with_capacity(self.space.len() + self.page.len() + 1);
        escape_into(&mut out, &self.space);
        out.push(SPACE_SEPARATOR);
        escape_into(&mut out, &self.page);
        out
    }

    /// Escaped `wiki:space.page` form.
    pub fn full_name(&self) -> String {
        let mut out = String::with_capacity(self.wiki.len() + 1);
        escape_into(&mut out, &self.wiki);
        out.push(WIKI_SEPARATOR);
        out.push_str(&self.local_name());
        out
    }
}

impl fmt::Debug for DocumentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentReference({})", self.full_name())
    }
}

impl fmt::Display for DocumentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
