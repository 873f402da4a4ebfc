//! Relationship kind - the semantic role of a relationship edge

/// Role a relationship plays from the declaring type's side
///
/// Kinds come in complementary pairs:
/// - Contained / Container: ownership of child instances
/// - Consumer / Provider: wiring of produced values into consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipKind {
    /// Instances of the declaring type live inside the referenced type
    Contained,

    /// Instances of the declaring type hold instances of the referenced type
    Container,

    /// The declaring type consumes what the referenced type provides
    Consumer,

    /// The declaring type provides what the referenced type consumes
    Provider,
}

impl RelationshipKind {
    /// All kinds, in declaration order
    pub const ALL: [RelationshipKind; 4] = [
        RelationshipKind::Contained,
        RelationshipKind::Container,
        RelationshipKind::Consumer,
        RelationshipKind::Provider,
    ];

    /// Get the kind name as it appears in declarations
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Contained => "contained",
            RelationshipKind::Container => "container",
            RelationshipKind::Consumer => "consumer",
            RelationshipKind::Provider => "provider",
        }
    }

    /// Parse a kind from its declared name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "contained" => Some(RelationshipKind::Contained),
            "container" => Some(RelationshipKind::Container),
            "consumer" => Some(RelationshipKind::Consumer),
            "provider" => Some(RelationshipKind::Provider),
            _ => None,
        }
    }

    /// The kind a counterpart declaration must have
    pub fn complement(&self) -> Self {
        match self {
            RelationshipKind::Contained => RelationshipKind::Container,
            RelationshipKind::Container => RelationshipKind::Contained,
            RelationshipKind::Consumer => RelationshipKind::Provider,
            RelationshipKind::Provider => RelationshipKind::Consumer,
        }
    }

    /// Check whether `other` is the complementary kind of `self`
    pub fn complements(&self, other: RelationshipKind) -> bool {
        self.complement() == other
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationshipKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relationship kind: {}", s))
    }
}
