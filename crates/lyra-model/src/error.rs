//! Error types for model registration and loading

use thiserror::Error;

/// Errors that can occur while building a type model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Failed to read a model file
    #[error("Failed to read model file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse model TOML
    #[error("Failed to parse model TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A type or alias with this name is already registered
    #[error("Type already registered: {0}")]
    DuplicateType(String),

    /// Name is not a valid type name
    #[error("Invalid type name: {0}")]
    InvalidTypeName(String),

    /// A declaration references a type that is not declared
    #[error("Type '{referenced_by}' references unknown type '{type_name}'")]
    UnresolvedType {
        /// Name that could not be resolved
        type_name: String,
        /// Declaration holding the reference
        referenced_by: String,
    },

    /// An alias resolves to itself
    #[error("Alias cycle detected at: {0}")]
    AliasCycle(String),

    /// Attribute, key or reverse name is not a valid member name
    #[error("Invalid member name '{name}' in type '{type_name}'")]
    InvalidMemberName {
        /// Declaring type
        type_name: String,
        /// Offending name
        name: String,
    },

    /// Attribute declared twice on the same type
    #[error("Attribute '{name}' declared twice in type '{type_name}'")]
    DuplicateAttribute {
        /// Declaring type
        type_name: String,
        /// Attribute name
        name: String,
    },
}
