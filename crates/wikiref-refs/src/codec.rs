//! Encoding and decoding of object references.
//!
//! [`ObjectReferenceCodec`] joins the string-level codec of [`crate::names`]
//! with an injected resolver and serializer, mapping between object names
//! and (class reference, object number) pairs. It performs no lookups of
//! its own and propagates collaborator failures unchanged.

use std::fmt;
use std::sync::Arc;

use wikiref_model::{ClassReference, DocumentReference};

use crate::error::Result;
use crate::names::{join_object_name, split_object_name};
use crate::traits::{DocumentReferenceResolver, EntityReferenceSerializer};
use crate::types::ObjectReference;

/// Maps object names to class references and object numbers and back.
///
/// Cloning is cheap; clones share the same collaborators.
#[derive(Clone)]
pub struct ObjectReferenceCodec {
    resolver: Arc<dyn DocumentReferenceResolver>,
    serializer: Arc<dyn EntityReferenceSerializer>,
}

impl ObjectReferenceCodec {
    /// Create a codec over a resolver/serializer pair that agree with each
    /// other.
    pub fn new(
        resolver: Arc<dyn DocumentReferenceResolver>,
        serializer: Arc<dyn EntityReferenceSerializer>,
    ) -> Self {
        Self {
            resolver,
            serializer,
        }
    }

    /// Encode a class reference and optional object number as an object
    /// name.
    pub fn encode(&self, class_reference: &ClassReference, object_number: Option<u32>) -> String {
        let class_name = self.serializer.serialize(class_reference);
        join_object_name(&class_name, object_number)
    }

    /// Decode an object name into its class reference and object number.
    pub fn decode(&self, name: &str) -> Result<(ClassReference, Option<u32>)> {
        let parts = split_object_name(name)?;
        let class_reference = self.resolver.resolve(parts.class_name)?;
        Ok((class_reference, parts.object_number))
    }

    /// Build a reference to the object called `name` in `document`.
    pub fn parse(&self, name: &str, document: DocumentReference) -> Result<ObjectReference> {
        let (class_reference, object_number) = self.decode(name)?;
        Ok(ObjectReference::from_parts(
            name.to_string(),
            document,
            class_reference,
            object_number,
        ))
    }

    /// Build a reference to object `object_number` of class
    /// `class_reference` in `document`.
    ///
    /// Without a number, the reference designates the first object of the
    /// class.
    pub fn build(
        &self,
        class_reference: ClassReference,
        object_number: Option<u32>,
        document: DocumentReference,
    ) -> ObjectReference {
        let name = self.encode(&class_reference, object_number);
        ObjectReference::from_parts(name, document, class_reference, object_number)
    }

    /// A reference to the object called `name` in the same document as
    /// `reference`.
    pub fn rename(&self, reference: &ObjectReference, name: &str) -> Result<ObjectReference> {
        self.parse(name, reference.document().clone())
    }
}

impl fmt::Debug for ObjectReferenceCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectReferenceCodec").finish_non_exhaustive()
    }
}
