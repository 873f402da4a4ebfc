//! Annotation implementations attached to object types

use std::collections::BTreeMap;

use lyra_domain::traits::{Annotation, Resource, RESOURCE_ANNOTATION};
use lyra_domain::Relationship;

/// The resource annotation: a type's relationship declarations by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceAnnotation {
    relationships: BTreeMap<String, Relationship>,
}

impl ResourceAnnotation {
    /// Create an empty resource annotation
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `relationship` under the attribute `name`
    pub fn with_relationship(
        mut self,
        name: impl Into<String>,
        relationship: Relationship,
    ) -> Self {
        self.relationships.insert(name.into(), relationship);
        self
    }

    /// Number of declared relationships
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// Whether no relationships are declared
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}

impl FromIterator<(String, Relationship)> for ResourceAnnotation {
    fn from_iter<I: IntoIterator<Item = (String, Relationship)>>(iter: I) -> Self {
        Self {
            relationships: iter.into_iter().collect(),
        }
    }
}

impl Resource for ResourceAnnotation {
    fn relationships(&self) -> &BTreeMap<String, Relationship> {
        &self.relationships
    }
}

impl Annotation for ResourceAnnotation {
    fn annotation_type(&self) -> &str {
        RESOURCE_ANNOTATION
    }

    fn as_resource(&self) -> Option<&dyn Resource> {
        Some(self)
    }
}

/// Free-form annotation with string values and no capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataAnnotation {
    annotation_type: String,
    values: BTreeMap<String, String>,
}

impl MetadataAnnotation {
    /// Create an empty annotation of the given type
    pub fn new(annotation_type: impl Into<String>) -> Self {
        Self {
            annotation_type: annotation_type.into(),
            values: BTreeMap::new(),
        }
    }

    /// Add a named value
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a named value
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Annotation for MetadataAnnotation {
    fn annotation_type(&self) -> &str {
        &self.annotation_type
    }
}
