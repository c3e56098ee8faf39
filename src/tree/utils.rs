//! Prefix and connector helpers

/// Connector drawn in front of a child line.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Prefix inherited by the children of an entry drawn with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
