//! Trait definitions for external interactions
//!
//! These traits define the boundary between relationship validation and the
//! type system and annotation storage it reads from. Implementations live in
//! other crates (lyra-model).

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::{Relationship, TypeName, TypeRef};

/// Annotation type name under which resource annotations are attached
pub const RESOURCE_ANNOTATION: &str = "Lyra::Resource";

/// Annotation bundle carrying a type's relationship declarations
pub trait Resource: Send + Sync {
    /// Relationships keyed by the attribute name they are declared under
    fn relationships(&self) -> &BTreeMap<String, Relationship>;
}

/// Metadata attached to an object type
///
/// Capabilities are discovered through the `as_*` methods rather than by
/// downcasting.
pub trait Annotation: Debug + Send + Sync {
    /// Name of the annotation type, e.g. `Lyra::Resource`
    fn annotation_type(&self) -> &str;

    /// The resource-relationship capability, if this annotation has it
    fn as_resource(&self) -> Option<&dyn Resource> {
        None
    }
}

/// An object type as seen by the validator
pub trait ObjectType {
    /// Qualified type name
    fn name(&self) -> &TypeName;

    /// Whether `attribute` is declared on this type, whatever its visibility
    fn has_attribute(&self, attribute: &str) -> bool;

    /// Annotation attached under `annotation_type`
    fn annotation(&self, annotation_type: &str) -> Option<&dyn Annotation>;

    /// The resource annotation, if one is attached and has the capability
    fn resource(&self) -> Option<&dyn Resource> {
        self.annotation(RESOURCE_ANNOTATION)
            .and_then(|annotation| annotation.as_resource())
    }
}

/// Read-only view of a type model
///
/// Implemented by the model layer (lyra-model). The model must not change
/// while validation runs.
pub trait TypeModel {
    /// Object type representation
    type Object: ObjectType;

    /// Resolve a reference to a registered object type
    ///
    /// Returns `None` for primitives, aliases and unknown names.
    fn object_type(&self, ty: &TypeRef) -> Option<&Self::Object>;

    /// All registered object types, ordered by name
    fn object_types(&self) -> Vec<&Self::Object>;
}
