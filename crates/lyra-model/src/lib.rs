//! Lyra Model Layer
//!
//! In-memory implementation of the type system and annotation storage that
//! relationship validation reads from.
//!
//! # Architecture
//!
//! - [`TypeRegistry`] holds object types, aliases and primitive names and
//!   implements [`lyra_domain::traits::TypeModel`]
//! - [`ObjectTypeDef`] carries attributes and annotations and implements
//!   [`lyra_domain::traits::ObjectType`]
//! - [`ResourceAnnotation`] carries a type's relationship declarations
//! - [`ModelFile`] loads declarations from TOML
//!
//! # Examples
//!
//! ```
//! use lyra_model::ModelFile;
//!
//! let model = ModelFile::from_toml(r#"
//!     [[types]]
//!     name = "Folder"
//!     attributes = ["id"]
//! "#).unwrap();
//! let registry = model.into_registry().unwrap();
//! assert!(registry.contains("Folder"));
//! ```

#![warn(missing_docs)]

mod annotation;
mod error;
mod loader;
mod registry;

pub use annotation::{MetadataAnnotation, ResourceAnnotation};
pub use error::ModelError;
pub use loader::{
    AliasDecl, AttributeDecl, DetailedAttribute, ModelFile, RelationshipDecl, TypeDecl,
};
pub use registry::{
    AttributeDef, ObjectTypeDef, TypeRegistry, Visibility, PRIMITIVE_TYPES, RELATIONSHIP_TYPE,
};
