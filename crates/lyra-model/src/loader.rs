//! Model files: type declarations loaded from TOML
//!
//! ```toml
//! [[types]]
//! name = "Folder"
//! attributes = ["id", { name = "secret", visibility = "private" }]
//!
//! [types.relationships.children]
//! type = "File"
//! kind = "container"
//! cardinality = "many"
//! keys = ["id", "parentId"]
//!
//! [[aliases]]
//! name = "Dir"
//! target = "Folder"
//! ```
//!
//! A type with a `relationships` table (even an empty one) carries a resource
//! annotation; a type without it carries none.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use lyra_domain::{is_member_name, Cardinality, Relationship, RelationshipKind, TypeName, TypeRef};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::registry::{
    AttributeDef, ObjectTypeDef, TypeRegistry, Visibility, PRIMITIVE_TYPES, RELATIONSHIP_TYPE,
};
use crate::{ModelError, ResourceAnnotation};

/// Top-level contents of a model file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    /// Object type declarations
    #[serde(default)]
    pub types: Vec<TypeDecl>,

    /// Alias declarations
    #[serde(default)]
    pub aliases: Vec<AliasDecl>,
}

/// Declaration of one object type
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    /// Qualified type name
    pub name: String,

    /// Declared attributes
    #[serde(default)]
    pub attributes: Vec<AttributeDecl>,

    /// Relationships keyed by the attribute name they are declared under
    #[serde(default)]
    pub relationships: Option<BTreeMap<String, RelationshipDecl>>,
}

/// Attribute declaration, either a bare name or a table with visibility
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttributeDecl {
    /// Public attribute
    Name(String),
    /// Attribute with explicit visibility
    Detailed(DetailedAttribute),
}

/// Table form of an attribute declaration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedAttribute {
    /// Attribute name
    pub name: String,

    /// Visibility, public when omitted
    #[serde(default)]
    pub visibility: Visibility,
}

impl AttributeDecl {
    fn name(&self) -> &str {
        match self {
            AttributeDecl::Name(name) => name,
            AttributeDecl::Detailed(detailed) => &detailed.name,
        }
    }

    fn into_def(self) -> AttributeDef {
        match self {
            AttributeDecl::Name(name) => AttributeDef::new(name),
            AttributeDecl::Detailed(detailed) => {
                AttributeDef::new(detailed.name).with_visibility(detailed.visibility)
            }
        }
    }
}

/// Declaration of one relationship
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationshipDecl {
    /// Name of the referenced type
    #[serde(rename = "type")]
    pub type_name: String,

    /// Relationship kind
    #[serde(deserialize_with = "deserialize_kind")]
    pub kind: RelationshipKind,

    /// Relationship cardinality
    #[serde(deserialize_with = "deserialize_cardinality")]
    pub cardinality: Cardinality,

    /// Key pairs, flattened
    #[serde(default)]
    pub keys: Vec<String>,

    /// Counterpart attribute name on the referenced type
    #[serde(default)]
    pub reverse_name: Option<String>,
}

/// Declaration of a type alias
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasDecl {
    /// Alias name
    pub name: String,
    /// Aliased type name
    pub target: String,
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<RelationshipKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn deserialize_cardinality<'de, D>(deserializer: D) -> Result<Cardinality, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl ModelFile {
    /// Parse a model from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ModelError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a model from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Build a registry holding every declared type and alias
    ///
    /// The registry also holds the built-in `Lyra::Relationship` type.
    pub fn into_registry(self) -> Result<TypeRegistry, ModelError> {
        let mut objects = BTreeSet::new();
        objects.insert(TypeName::new(RELATIONSHIP_TYPE).map_err(ModelError::InvalidTypeName)?);
        for decl in &self.types {
            objects.insert(TypeName::new(decl.name.as_str()).map_err(ModelError::InvalidTypeName)?);
        }

        let aliases: BTreeMap<String, String> = self
            .aliases
            .iter()
            .map(|a| (a.name.clone(), a.target.clone()))
            .collect();
        let resolver = Resolver {
            objects: &objects,
            aliases: &aliases,
        };

        let mut defs = Vec::with_capacity(self.types.len());
        for decl in self.types {
            defs.push(decl.build(&resolver)?);
        }

        let mut alias_refs = Vec::with_capacity(self.aliases.len());
        for decl in &self.aliases {
            let name = TypeName::new(decl.name.as_str()).map_err(ModelError::InvalidTypeName)?;
            let target = resolver.resolve(&decl.target, &decl.name)?;
            alias_refs.push((name, target));
        }

        let mut registry = TypeRegistry::new();
        registry.register_relationship_type()?;
        for def in defs {
            registry.register_type(def)?;
        }
        let alias_count = alias_refs.len();
        for (name, target) in alias_refs {
            registry.register_alias(name, target)?;
        }

        info!(types = registry.len(), aliases = alias_count, "Loaded type model");
        Ok(registry)
    }
}

impl TypeDecl {
    fn build(self, resolver: &Resolver<'_>) -> Result<ObjectTypeDef, ModelError> {
        let name = TypeName::new(self.name.as_str()).map_err(ModelError::InvalidTypeName)?;
        let invalid_member = |member: &str| ModelError::InvalidMemberName {
            type_name: self.name.clone(),
            name: member.to_string(),
        };

        let mut seen = BTreeSet::new();
        let mut def = ObjectTypeDef::new(name);
        for attribute in self.attributes {
            if !is_member_name(attribute.name()) {
                return Err(invalid_member(attribute.name()));
            }
            if !seen.insert(attribute.name().to_string()) {
                return Err(ModelError::DuplicateAttribute {
                    type_name: self.name.clone(),
                    name: attribute.name().to_string(),
                });
            }
            def = def.with_attribute(attribute.into_def());
        }

        let Some(declared) = self.relationships else {
            return Ok(def);
        };

        let mut resource = ResourceAnnotation::new();
        for (rel_name, decl) in declared {
            if !is_member_name(&rel_name) {
                return Err(invalid_member(&rel_name));
            }
            if let Some(bad) = decl.keys.iter().find(|k| !is_member_name(k)) {
                return Err(invalid_member(bad));
            }

            let type_ref = resolver.resolve(&decl.type_name, &self.name)?;
            let mut relationship =
                Relationship::new(type_ref, decl.kind, decl.cardinality).with_keys(decl.keys);
            if let Some(reverse_name) = decl.reverse_name {
                if !is_member_name(&reverse_name) {
                    return Err(invalid_member(&reverse_name));
                }
                relationship = relationship.with_reverse_name(reverse_name);
            }

            debug!(type_name = %self.name, relationship = %rel_name, "Declared relationship");
            resource = resource.with_relationship(rel_name, relationship);
        }

        Ok(def.with_annotation(resource))
    }
}

/// Resolves declared type names before the registry is populated
struct Resolver<'a> {
    objects: &'a BTreeSet<TypeName>,
    aliases: &'a BTreeMap<String, String>,
}

impl Resolver<'_> {
    fn resolve(&self, name: &str, referenced_by: &str) -> Result<TypeRef, ModelError> {
        self.resolve_chain(name, referenced_by, &mut Vec::new())
    }

    fn resolve_chain(
        &self,
        name: &str,
        referenced_by: &str,
        seen: &mut Vec<String>,
    ) -> Result<TypeRef, ModelError> {
        if PRIMITIVE_TYPES.contains(&name) {
            return Ok(TypeRef::Primitive(name.to_string()));
        }

        let unresolved = || ModelError::UnresolvedType {
            type_name: name.to_string(),
            referenced_by: referenced_by.to_string(),
        };
        let type_name = TypeName::new(name).map_err(|_| unresolved())?;
        if self.objects.contains(&type_name) {
            return Ok(TypeRef::Object(type_name));
        }

        let Some(target) = self.aliases.get(name) else {
            return Err(unresolved());
        };
        if seen.iter().any(|s| s == name) {
            return Err(ModelError::AliasCycle(name.to_string()));
        }
        seen.push(name.to_string());

        let target = self.resolve_chain(target, name, seen)?;
        Ok(TypeRef::Alias {
            name: type_name,
            target: Box::new(target),
        })
    }
}
