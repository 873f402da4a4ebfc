//! Relationship module - declared edges between object types
//!
//! A relationship is declared on one type (the declaring or owning type) under
//! an attribute name and points at a referenced type. Every declaration must
//! be mirrored by exactly one counterpart declaration on the referenced type.

use crate::{Cardinality, RelationshipKind, TypeName, TypeRef};

/// A relationship declaration from a declaring type to a referenced type
///
/// Relationships are immutable once built; they are owned by the resource
/// annotation of the declaring type.
///
/// # Examples
///
/// ```
/// use lyra_domain::{Cardinality, Relationship, RelationshipKind, TypeName, TypeRef};
///
/// let folder = TypeName::new("Folder").unwrap();
/// let parent = Relationship::new(
///     TypeRef::object(folder),
///     RelationshipKind::Contained,
///     Cardinality::One,
/// )
/// .with_keys(["parentId", "id"])
/// .with_reverse_name("children");
///
/// assert_eq!(parent.key_pairs().count(), 1);
/// assert_eq!(parent.reverse_name(), Some("children"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    type_ref: TypeRef,
    kind: RelationshipKind,
    cardinality: Cardinality,
    keys: Vec<String>,
    reverse_name: Option<String>,
}

impl Relationship {
    /// Create a relationship with no keys and no reverse name
    pub fn new(type_ref: TypeRef, kind: RelationshipKind, cardinality: Cardinality) -> Self {
        Self {
            type_ref,
            kind,
            cardinality,
            keys: Vec::new(),
            reverse_name: None,
        }
    }

    /// Set the key sequence, read as `(local, remote)` pairs
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the attribute name on the referenced type holding the counterpart
    pub fn with_reverse_name(mut self, reverse_name: impl Into<String>) -> Self {
        self.reverse_name = Some(reverse_name.into());
        self
    }

    /// Referenced type
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// Semantic role of this side
    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// Participation count on this side
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Raw key sequence
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Counterpart attribute name on the referenced type, if declared
    pub fn reverse_name(&self) -> Option<&str> {
        self.reverse_name.as_deref()
    }

    /// Iterate `(local attribute, remote attribute)` key pairs
    ///
    /// A trailing unpaired key is not yielded.
    pub fn key_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.keys
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Check whether `self` is the counterpart of `other`
    ///
    /// `other` is declared under `name` on `owning_type`. The check holds when
    /// the kinds complement each other, the cardinalities pair, the reverse
    /// name (if any) names `other`, the keys mirror each other and `self`
    /// points back at `owning_type`.
    pub fn is_counterpart_of(
        &self,
        name: &str,
        owning_type: &TypeName,
        other: &Relationship,
    ) -> bool {
        if !self.kind.complements(other.kind) {
            return false;
        }

        if !self.cardinality.pairs_with(other.cardinality) {
            return false;
        }

        if let Some(reverse_name) = &self.reverse_name {
            if reverse_name != name {
                return false;
            }
        }

        if !self.mirrors_keys_of(other) {
            return false;
        }

        self.type_ref.equals_object(owning_type)
    }

    /// Keys must equal the other side's keys read in reverse
    ///
    /// Two empty key lists mirror each other.
    fn mirrors_keys_of(&self, other: &Relationship) -> bool {
        self.keys.len() == other.keys.len() && self.keys.iter().eq(other.keys.iter().rev())
    }
}
