//! String validation functions

/// True when the value is empty or whitespace only
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Required check: passes for any value with non-whitespace content
pub fn is_present(s: &str) -> bool {
    !is_blank(s)
}
