//! Lyra Domain Layer
//!
//! This crate contains the relationship model used by the Lyra type-annotation
//! framework. It has no runtime dependencies and defines the value objects and
//! trait interfaces that the model and validator layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Relationship**: A declared edge from a declaring type to a referenced type
//! - **Kind**: The role of an edge (contained, container, consumer, provider)
//! - **Cardinality**: How many instances take part on one side
//! - **Counterpart**: The mirrored declaration on the referenced type
//!
//! ## Architecture
//!
//! - Pure domain logic only
//! - Type system and annotation storage are reached through [`traits`]
//! - Validation orchestration lives in `lyra-validator`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cardinality;
pub mod kind;
pub mod member;
pub mod relationship;
pub mod traits;
pub mod type_ref;

// Re-exports for convenience
pub use cardinality::Cardinality;
pub use kind::RelationshipKind;
pub use member::is_member_name;
pub use relationship::Relationship;
pub use type_ref::{TypeName, TypeRef};
