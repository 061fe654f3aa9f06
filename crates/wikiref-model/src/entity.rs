use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of entity a reference (or a component of one) names.
///
/// Ordered from the outermost container to the innermost addressable
/// entity: a wiki holds spaces, a space holds documents, and a document
/// holds typed objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Wiki,
    Space,
    Document,
    Object,
}

impl EntityType {
    /// All entity types, outermost first.
    pub const ALL: [EntityType; 4] = [
        EntityType::Wiki,
        EntityType::Space,
        EntityType::Document,
        EntityType::Object,
    ];

    /// Lowercase name used in messages and configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Wiki => "wiki",
            EntityType::Space => "space",
            EntityType::Document => "document",
            EntityType::Object => "object",
        }
    }

    /// The entity type that directly contains this one, if any.
    pub fn parent(&self) -> Option<EntityType> {
        match self {
            EntityType::Wiki => None,
            EntityType::Space => Some(EntityType::Wiki),
            EntityType::Document => Some(EntityType::Space),
            EntityType::Object => Some(EntityType::Document),
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_chain_ends_at_wiki() {
        let mut current = EntityType::Object;
        let mut chain = vec![current];
        while let Some(parent) = current.parent() {
            chain.push(parent);
            current = parent;
        }
        assert_eq!(
            chain,
            vec![
                EntityType::Object,
                EntityType::Document,
                EntityType::Space,
                EntityType::Wiki
            ]
        );
    }

    #[test]
    fn ordering_is_outermost_first() {
        let mut sorted = EntityType::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, EntityType::ALL.to_vec());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(EntityType::Document.to_string(), "document");
        assert_eq!(format!("{}", EntityType::Wiki), "wiki");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&EntityType::Space).unwrap();
        assert_eq!(json, "\"space\"");
        let parsed: EntityType = serde_json::from_str("\"object\"").unwrap();
        assert_eq!(parsed, EntityType::Object);
    }
}
