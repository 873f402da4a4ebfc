//! Cardinality module - how many instances take part on one side of a relationship

/// Number of referenced instances participating from the declaring side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cardinality {
    /// Exactly one instance
    One,

    /// Any number of instances
    Many,

    /// At most one instance
    ZeroOrOne,
}

impl Cardinality {
    /// All cardinalities, in declaration order
    pub const ALL: [Cardinality; 3] = [Cardinality::One, Cardinality::Many, Cardinality::ZeroOrOne];

    /// Get the cardinality name as it appears in declarations
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::One => "one",
            Cardinality::Many => "many",
            Cardinality::ZeroOrOne => "zero_or_one",
        }
    }

    /// Parse a cardinality from its declared name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "one" => Some(Cardinality::One),
            "many" => Some(Cardinality::Many),
            "zero_or_one" => Some(Cardinality::ZeroOrOne),
            _ => None,
        }
    }

    /// Check whether a counterpart declared with `other` can pair with this side
    ///
    /// A `many` side cannot face another `many` side and a `one` side cannot
    /// face another `one` side. `zero_or_one` places no constraint.
    pub fn pairs_with(&self, other: Cardinality) -> bool {
        match self {
            Cardinality::Many => other != Cardinality::Many,
            Cardinality::One => other != Cardinality::One,
            Cardinality::ZeroOrOne => true,
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Cardinality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid cardinality: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_sides_do_not_pair_with_themselves() {
        assert!(!Cardinality::Many.pairs_with(Cardinality::Many));
        assert!(!Cardinality::One.pairs_with(Cardinality::One));
    }

    #[test]
    fn test_mixed_sides_pair() {
        assert!(Cardinality::Many.pairs_with(Cardinality::One));
        assert!(Cardinality::Many.pairs_with(Cardinality::ZeroOrOne));
        assert!(Cardinality::One.pairs_with(Cardinality::Many));
        assert!(Cardinality::One.pairs_with(Cardinality::ZeroOrOne));
    }

    #[test]
    fn test_zero_or_one_is_unconstrained() {
        for other in Cardinality::ALL {
            assert!(Cardinality::ZeroOrOne.pairs_with(other));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("zero_or_one".parse::<Cardinality>(), Ok(Cardinality::ZeroOrOne));
        assert!(Cardinality::parse("zero-or-one").is_none());
    }
}
