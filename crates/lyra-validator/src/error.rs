//! Relationship validation error types

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Symbolic kind of a validation failure
///
/// Message text is left to whoever reports the issue; the code and the
/// detail map returned by [`RelationshipError::details`] carry everything
/// needed to format one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum IssueCode {
    /// Referenced type is not an object type
    RelationshipTypeIsNotObject,
    /// Key list has an odd length
    RelationshipKeysUneven,
    /// Key names an attribute the type does not declare
    UnknownAttribute,
    /// Referenced type carries no usable resource annotation
    NoResourceAnnotation,
    /// No compatible counterpart declaration
    CounterpartNotFound,
    /// More than one compatible counterpart declaration
    MultipleCounterparts,
}

impl IssueCode {
    /// Get the code name
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::RelationshipTypeIsNotObject => "RelationshipTypeIsNotObject",
            IssueCode::RelationshipKeysUneven => "RelationshipKeysUneven",
            IssueCode::UnknownAttribute => "UnknownAttribute",
            IssueCode::NoResourceAnnotation => "NoResourceAnnotation",
            IssueCode::CounterpartNotFound => "CounterpartNotFound",
            IssueCode::MultipleCounterparts => "MultipleCounterparts",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while validating a single relationship declaration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationshipError {
    /// Referenced type does not resolve to an object type
    #[error("Relationship type '{type_name}' is not an object type")]
    TypeIsNotObject {
        /// Referenced type as declared
        type_name: String,
    },

    /// Keys cannot be read as pairs
    #[error("Relationship keys declared on '{type_name}' do not form pairs")]
    KeysUneven {
        /// Declaring type
        type_name: String,
    },

    /// Key refers to an attribute that is not declared
    #[error("Type '{type_name}' has no attribute named '{name}'")]
    UnknownAttribute {
        /// Type expected to declare the attribute
        type_name: String,
        /// Attribute name
        name: String,
    },

    /// Referenced type has no resource annotation
    #[error("Type '{type_name}' has no resource annotation")]
    NoResourceAnnotation {
        /// Referenced type
        type_name: String,
    },

    /// No counterpart on the referenced type
    #[error("No counterpart found for relationship '{name}' declared on '{type_name}'")]
    CounterpartNotFound {
        /// Declaring type
        type_name: String,
        /// Relationship name
        name: String,
    },

    /// Several counterparts on the referenced type
    #[error("Multiple counterparts found for relationship '{name}' declared on '{type_name}'")]
    MultipleCounterparts {
        /// Declaring type
        type_name: String,
        /// Relationship name
        name: String,
    },
}

impl RelationshipError {
    /// Symbolic kind of this failure
    pub fn code(&self) -> IssueCode {
        match self {
            RelationshipError::TypeIsNotObject { .. } => IssueCode::RelationshipTypeIsNotObject,
            RelationshipError::KeysUneven { .. } => IssueCode::RelationshipKeysUneven,
            RelationshipError::UnknownAttribute { .. } => IssueCode::UnknownAttribute,
            RelationshipError::NoResourceAnnotation { .. } => IssueCode::NoResourceAnnotation,
            RelationshipError::CounterpartNotFound { .. } => IssueCode::CounterpartNotFound,
            RelationshipError::MultipleCounterparts { .. } => IssueCode::MultipleCounterparts,
        }
    }

    /// Named values describing this failure (`type`, and `name` where relevant)
    pub fn details(&self) -> BTreeMap<&'static str, String> {
        let mut details = BTreeMap::new();
        match self {
            RelationshipError::TypeIsNotObject { type_name }
            | RelationshipError::KeysUneven { type_name }
            | RelationshipError::NoResourceAnnotation { type_name } => {
                details.insert("type", type_name.clone());
            }
            RelationshipError::UnknownAttribute { type_name, name }
            | RelationshipError::CounterpartNotFound { type_name, name }
            | RelationshipError::MultipleCounterparts { type_name, name } => {
                details.insert("type", type_name.clone());
                details.insert("name", name.clone());
            }
        }
        details
    }
}
