//! Type names and type references
//!
//! A relationship points at another type through a [`TypeRef`]. Only object
//! types can take part in relationships; primitives and aliases are still
//! representable so that a misdeclared relationship can be reported instead of
//! rejected at construction.

use std::fmt;

/// Qualified name of a type, e.g. `Folder` or `Lyra::Relationship`
///
/// Each `::`-separated segment must start with an uppercase ASCII letter and
/// continue with ASCII alphanumerics or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(String);

impl TypeName {
    /// Create a new type name
    ///
    /// # Errors
    /// Returns error if any segment is not a valid type name segment
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        if value.is_empty() {
            return Err("Type name cannot be empty".to_string());
        }

        for segment in value.split("::") {
            if !is_type_segment(segment) {
                return Err(format!("Invalid type name: {}", value));
            }
        }

        Ok(Self(value))
    }

    /// Get the type name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the last segment (the name without its namespace)
    pub fn simple_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }
}

fn is_type_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reference from a relationship to the type it points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A named object type
    Object(TypeName),

    /// A primitive type such as `String` or `Integer`
    Primitive(String),

    /// A named alias for another type
    Alias {
        /// Alias name
        name: TypeName,
        /// Aliased type
        target: Box<TypeRef>,
    },
}

impl TypeRef {
    /// Reference an object type by name
    pub fn object(name: TypeName) -> Self {
        TypeRef::Object(name)
    }

    /// Name of the referenced type as declared
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Object(name) => name.as_str(),
            TypeRef::Primitive(name) => name,
            TypeRef::Alias { name, .. } => name.as_str(),
        }
    }

    /// The object type name, if this reference is directly an object type
    ///
    /// Aliases are not followed: a relationship must name its object type
    /// directly.
    pub fn as_object(&self) -> Option<&TypeName> {
        match self {
            TypeRef::Object(name) => Some(name),
            _ => None,
        }
    }

    /// Follow aliases to the underlying type
    pub fn resolved(&self) -> &TypeRef {
        let mut current = self;
        while let TypeRef::Alias { target, .. } = current {
            current = target;
        }
        current
    }

    /// Equality against an object type
    ///
    /// Only a direct object reference matches. An alias is a distinct type
    /// even when its chain ends at `ty`.
    pub fn equals_object(&self, ty: &TypeName) -> bool {
        matches!(self, TypeRef::Object(name) if name == ty)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
