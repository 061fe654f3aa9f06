//! The object reference value.
//!
//! An object reference addresses one typed object attached to a document:
//! the document, the class of the object, and which object of that class
//! (by number, or the first one when no number is given). The object name
//! `className[objectNumber]` is kept next to the derived fields it was
//! decoded from or encoded into.

use std::fmt;

use serde::Serialize;
use wikiref_model::{ClassReference, DocumentReference, EntityType};

/// Separates the document from the object name in the display form.
pub const OBJECT_SEPARATOR: char = '^';

/// An immutable reference to an object attached to a document.
///
/// Built by [`crate::codec::ObjectReferenceCodec`], either from an object
/// name or from a class reference and object number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectReference {
    name: String,
    document: DocumentReference,
    class_reference: ClassReference,
    object_number: Option<u32>,
}

impl ObjectReference {
    pub(crate) fn from_parts(
        name: String,
        document: DocumentReference,
        class_reference: ClassReference,
        object_number: Option<u32>,
    ) -> Self {
        Self {
            name,
            document,
            class_reference,
            object_number,
        }
    }

    /// The object name, `className[objectNumber]` or `className`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The document the object is attached to.
    pub fn document(&self) -> &DocumentReference {
        &self.document
    }

    /// The class of the object, as named by the caller. No lookup is done
    /// to check that such an object exists.
    pub fn class_reference(&self) -> &ClassReference {
        &self.class_reference
    }

    /// The number of the object among the objects of its class in the
    /// document.
    ///
    /// `None` means the first object of the class.
    pub fn object_number(&self) -> Option<u32> {
        self.object_number
    }

    /// Returns `true` if this refers to the first object of its class
    /// rather than to a numbered one.
    pub fn is_default_object(&self) -> bool {
        self.object_number.is_none()
    }

    pub fn entity_type(&self) -> EntityType {
        EntityType::Object
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.document, OBJECT_SEPARATOR, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(number: Option<u32>) -> ObjectReference {
        let class = DocumentReference::new("xwiki", "XWiki", "Mail").unwrap();
        let doc = DocumentReference::new("xwiki", "Main", "Welcome").unwrap();
        let name = match number {
            Some(n) => format!("xwiki:XWiki.Mail[{n}]"),
            None => "xwiki:XWiki.Mail".to_string(),
        };
        ObjectReference::from_parts(name, doc, class, number)
    }

    #[test]
    fn accessors() {
        let r = sample(Some(3));
        assert_eq!(r.name(), "xwiki:XWiki.Mail[3]");
        assert_eq!(r.document().page(), "Welcome");
        assert_eq!(r.class_reference().page(), "Mail");
        assert_eq!(r.object_number(), Some(3));
        assert_eq!(r.entity_type(), EntityType::Object);
        assert!(!r.is_default_object());
    }

    #[test]
    fn default_object_has_no_number() {
        let r = sample(None);
        assert!(r.is_default_object());
        assert_eq!(r.object_number(), None);
    }

    #[test]
    fn display_joins_document_and_name() {
        assert_eq!(
            sample(Some(0)).to_string(),
            "xwiki:Main.Welcome^xwiki:XWiki.Mail[0]"
        );
    }

    #[test]
    fn serializes_derived_fields() {
        let json = serde_json::to_value(sample(Some(1))).unwrap();
        assert_eq!(json["name"], "xwiki:XWiki.Mail[1]");
        assert_eq!(json["object_number"], 1);
        assert_eq!(json["class_reference"]["page"], "Mail");
        assert_eq!(json["document"]["space"], "Main");
    }
}
