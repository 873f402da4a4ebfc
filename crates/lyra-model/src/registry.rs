//! In-memory type registry
//!
//! Holds object types, aliases and primitive names. Registration is explicit:
//! nothing is registered globally, and the built-in `Lyra::Relationship` type
//! is added by calling [`TypeRegistry::register_relationship_type`] once while
//! the model is being set up.

use std::collections::{BTreeMap, BTreeSet};

use lyra_domain::traits::{Annotation, ObjectType, TypeModel};
use lyra_domain::{TypeName, TypeRef};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ModelError;

/// Name of the built-in relationship object type
pub const RELATIONSHIP_TYPE: &str = "Lyra::Relationship";

/// Primitive type names known to every registry
pub const PRIMITIVE_TYPES: [&str; 5] = ["String", "Integer", "Float", "Boolean", "Any"];

/// Attribute visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible everywhere
    #[default]
    Public,
    /// Visible to the type and its subtypes
    Protected,
    /// Visible to the type only
    Private,
}

/// Attribute declared on an object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDef {
    /// Attribute name
    pub name: String,
    /// Declared visibility
    pub visibility: Visibility,
}

impl AttributeDef {
    /// Create a public attribute
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
        }
    }

    /// Set the visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// An object type definition with its attributes and annotations
#[derive(Debug)]
pub struct ObjectTypeDef {
    name: TypeName,
    attributes: Vec<AttributeDef>,
    annotations: BTreeMap<String, Box<dyn Annotation>>,
}

impl ObjectTypeDef {
    /// Create a type with no attributes or annotations
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            annotations: BTreeMap::new(),
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, attribute: AttributeDef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add public attributes by name
    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(names.into_iter().map(AttributeDef::new));
        self
    }

    /// Attach an annotation under its annotation type, replacing any previous one
    pub fn with_annotation(mut self, annotation: impl Annotation + 'static) -> Self {
        let key = annotation.annotation_type().to_string();
        self.annotations.insert(key, Box::new(annotation));
        self
    }

    /// Declared attributes in declaration order
    pub fn attributes(&self) -> &[AttributeDef] {
        &self.attributes
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

impl ObjectType for ObjectTypeDef {
    fn name(&self) -> &TypeName {
        &self.name
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        self.attribute(attribute).is_some()
    }

    fn annotation(&self, annotation_type: &str) -> Option<&dyn Annotation> {
        self.annotations.get(annotation_type).map(|a| a.as_ref())
    }
}

/// Registry of object types, aliases and primitives
#[derive(Debug)]
pub struct TypeRegistry {
    objects: BTreeMap<TypeName, ObjectTypeDef>,
    aliases: BTreeMap<TypeName, TypeRef>,
    primitives: BTreeSet<String>,
}

impl TypeRegistry {
    /// Create a registry holding only the primitive types
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            aliases: BTreeMap::new(),
            primitives: PRIMITIVE_TYPES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Register an object type
    ///
    /// # Errors
    /// Returns `DuplicateType` if the name is already taken
    pub fn register_type(&mut self, ty: ObjectTypeDef) -> Result<(), ModelError> {
        self.ensure_available(&ty.name)?;
        debug!(type_name = %ty.name, attributes = ty.attributes.len(), "Registered object type");
        self.objects.insert(ty.name.clone(), ty);
        Ok(())
    }

    /// Register an alias for another type
    ///
    /// # Errors
    /// Returns `DuplicateType` if the name is already taken
    pub fn register_alias(&mut self, name: TypeName, target: TypeRef) -> Result<(), ModelError> {
        self.ensure_available(&name)?;
        debug!(alias = %name, target = %target, "Registered type alias");
        self.aliases.insert(name, target);
        Ok(())
    }

    /// Register the built-in `Lyra::Relationship` object type
    ///
    /// Call once while setting up the model.
    ///
    /// # Errors
    /// Returns `DuplicateType` when called a second time
    pub fn register_relationship_type(&mut self) -> Result<(), ModelError> {
        let name = TypeName::new(RELATIONSHIP_TYPE).map_err(ModelError::InvalidTypeName)?;
        let ty = ObjectTypeDef::new(name)
            .with_attributes(["type", "kind", "cardinality", "keys", "reverse_name"]);
        self.register_type(ty)
    }

    /// Look up an object type by name
    pub fn get(&self, name: &TypeName) -> Option<&ObjectTypeDef> {
        self.objects.get(name)
    }

    /// Build a reference to a registered type by name
    ///
    /// Primitives win over object names, and aliases resolve to
    /// [`TypeRef::Alias`] carrying their target.
    pub fn reference(&self, name: &str) -> Option<TypeRef> {
        if self.primitives.contains(name) {
            return Some(TypeRef::Primitive(name.to_string()));
        }

        let type_name = TypeName::new(name).ok()?;
        if self.objects.contains_key(&type_name) {
            return Some(TypeRef::Object(type_name));
        }

        self.aliases.get(&type_name).map(|target| TypeRef::Alias {
            name: type_name,
            target: Box::new(target.clone()),
        })
    }

    /// Whether a type, alias or primitive is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.reference(name).is_some()
    }

    /// Number of registered object types
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no object types are registered
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn ensure_available(&self, name: &TypeName) -> Result<(), ModelError> {
        if self.objects.contains_key(name)
            || self.aliases.contains_key(name)
            || self.primitives.contains(name.as_str())
        {
            return Err(ModelError::DuplicateType(name.to_string()));
        }
        Ok(())
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeModel for TypeRegistry {
    type Object = ObjectTypeDef;

    fn object_type(&self, ty: &TypeRef) -> Option<&ObjectTypeDef> {
        ty.as_object().and_then(|name| self.objects.get(name))
    }

    fn object_types(&self) -> Vec<&ObjectTypeDef> {
        self.objects.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MetadataAnnotation, ResourceAnnotation};

    fn name(s: &str) -> TypeName {
        TypeName::new(s).unwrap()
    }

    #[test]
    fn test_new_registry_has_primitives_only() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.reference("String"),
            Some(TypeRef::Primitive("String".to_string()))
        );
    }

    #[test]
    fn test_register_relationship_type_once() {
        let mut registry = TypeRegistry::new();
        registry.register_relationship_type().unwrap();

        let ty = registry.get(&name(RELATIONSHIP_TYPE)).unwrap();
        assert!(ty.has_attribute("reverse_name"));
        assert!(ty.has_attribute("keys"));

        let again = registry.register_relationship_type();
        assert!(matches!(again, Err(ModelError::DuplicateType(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register_type(ObjectTypeDef::new(name("Folder"))).unwrap();

        assert!(registry.register_type(ObjectTypeDef::new(name("Folder"))).is_err());
        assert!(registry
            .register_alias(name("Folder"), TypeRef::Primitive("String".to_string()))
            .is_err());
        assert!(registry.register_type(ObjectTypeDef::new(name("Integer"))).is_err());
    }

    #[test]
    fn test_reference_resolution() {
        let mut registry = TypeRegistry::new();
        registry.register_type(ObjectTypeDef::new(name("Folder"))).unwrap();
        registry
            .register_alias(name("Dir"), TypeRef::object(name("Folder")))
            .unwrap();

        assert_eq!(registry.reference("Folder"), Some(TypeRef::object(name("Folder"))));
        let dir = registry.reference("Dir").unwrap();
        assert!(dir.as_object().is_none());
        assert_eq!(dir.resolved(), &TypeRef::object(name("Folder")));
        assert!(!dir.equals_object(&name("Folder")));
        assert!(registry.reference("Missing").is_none());
        assert!(registry.reference("not a type").is_none());
    }

    #[test]
    fn test_object_type_only_resolves_objects() {
        let mut registry = TypeRegistry::new();
        registry.register_type(ObjectTypeDef::new(name("Folder"))).unwrap();
        registry
            .register_alias(name("Dir"), TypeRef::object(name("Folder")))
            .unwrap();

        let dir = registry.reference("Dir").unwrap();
        assert!(registry.object_type(&dir).is_none());
        assert!(registry.object_type(&TypeRef::object(name("Folder"))).is_some());
        assert!(registry.object_type(&TypeRef::object(name("Nope"))).is_none());
    }

    #[test]
    fn test_attributes_of_any_visibility() {
        let ty = ObjectTypeDef::new(name("Folder"))
            .with_attributes(["id"])
            .with_attribute(AttributeDef::new("secret").with_visibility(Visibility::Private));

        assert!(ty.has_attribute("id"));
        assert!(ty.has_attribute("secret"));
        assert!(!ty.has_attribute("missing"));
        assert_eq!(ty.attribute("secret").unwrap().visibility, Visibility::Private);
    }

    #[test]
    fn test_resource_lookup_through_capability() {
        let with_resource =
            ObjectTypeDef::new(name("Folder")).with_annotation(ResourceAnnotation::new());
        assert!(with_resource.resource().is_some());

        let wrong_shape = ObjectTypeDef::new(name("File"))
            .with_annotation(MetadataAnnotation::new(lyra_domain::traits::RESOURCE_ANNOTATION));
        assert!(wrong_shape.annotation(lyra_domain::traits::RESOURCE_ANNOTATION).is_some());
        assert!(wrong_shape.resource().is_none());

        let bare = ObjectTypeDef::new(name("Drive"));
        assert!(bare.resource().is_none());
    }

    #[test]
    fn test_object_types_ordered_by_name() {
        let mut registry = TypeRegistry::new();
        registry.register_type(ObjectTypeDef::new(name("Zeta"))).unwrap();
        registry.register_type(ObjectTypeDef::new(name("Alpha"))).unwrap();

        let names: Vec<_> = registry
            .object_types()
            .into_iter()
            .map(|t| t.name().as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }
}
