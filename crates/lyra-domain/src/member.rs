//! Member names - identifiers usable as attribute names

/// Check that `name` is a valid member (attribute) name
///
/// A member name starts with a lowercase ASCII letter or underscore, followed
/// by ASCII alphanumerics or underscores.
pub fn is_member_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
