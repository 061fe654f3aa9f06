//! Object references for wikiref.
//!
//! Documents carry typed objects. An object is addressed by its document
//! and an object name of the form `className[objectNumber]`, where the
//! class name is the serialized reference of the document defining the
//! object's class and the number picks one object among those of the same
//! class. Without a number, the name designates the first object of the
//! class.
//!
//! # Architecture
//!
//! - **Names** are split and joined at the string level, with a backslash
//!   escape for class names that themselves end in `[digits]`.
//! - **Resolvers and serializers** turn class names into class references
//!   and back. They are injected, never global.
//! - **Default values** fill in the wiki, space or page a string reference
//!   leaves out.
//!
//! # Modules
//!
//! - [`error`]: Error types for reference operations
//! - [`names`]: The `className[objectNumber]` string codec
//! - [`traits`]: Resolver, serializer and value provider capabilities
//! - [`resolver`]: String resolver and serializer implementations
//! - [`config`]: [`ReferenceConfig`], the configured default values
//! - [`codec`]: [`ObjectReferenceCodec`], object names to references
//! - [`types`]: The [`ObjectReference`] value

pub mod codec;
pub mod config;
pub mod error;
pub mod names;
pub mod resolver;
pub mod traits;
pub mod types;

pub use codec::ObjectReferenceCodec;
pub use config::ReferenceConfig;
pub use error::{RefError, Result};
pub use names::{join_object_name, split_object_name, ObjectNameParts};
pub use resolver::{SerializerMode, StringReferenceResolver, StringReferenceSerializer};
pub use traits::{DocumentReferenceResolver, EntityReferenceSerializer, EntityReferenceValueProvider};
pub use types::ObjectReference;
