//! Foundation types for wikiref.
//!
//! This crate provides the entity and reference types used throughout the
//! wikiref workspace. Every other wikiref crate depends on `wikiref-model`.
//!
//! # Key Types
//!
//! - [`EntityType`]: The kind of entity a reference component names
//! - [`DocumentReference`]: A fully qualified `wiki:space.page` reference
//! - [`ClassReference`]: A document reference naming a class definition
//! - [`syntax`]: Separators and backslash escaping of the string form

pub mod document;
pub mod entity;
pub mod error;
pub mod syntax;

pub use document::{ClassReference, DocumentReference};
pub use entity::EntityType;
pub use error::ModelError;
