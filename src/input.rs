//! Cleanup of racks and board windows as people type them.
use crate::tiles::WILDCARD;

/// Normalize a rack: `_`, `?` and spaces become wildcards, letters are uppercased.
/// ## Examples
/// ```
/// use rack_solver::sanitize_rack;
/// assert_eq!(sanitize_rack("c_t?"), "C*T*");
/// ```
pub fn sanitize_rack(rack: &str) -> String {
    rack.chars()
        .map(|ch| match ch {
            '_' | '?' | ' ' => WILDCARD,
            ch => ch.to_ascii_uppercase(),
        })
        .collect()
}

/// Normalize a board window: spaces become open cells.
///
/// A window that begins with an open cell is anchored at the start, one that
/// ends with an open cell or a quantifier is anchored at the end.
/// ## Examples
/// ```
/// use rack_solver::sanitize_constraint;
/// assert_eq!(sanitize_constraint(" a t"), "^.a.t");
/// assert_eq!(sanitize_constraint("c  "), "c..$");
/// assert_eq!(sanitize_constraint("c.{2}"), "c.{2}$");
/// ```
pub fn sanitize_constraint(window: &str) -> String {
    let mut constraint: String = window
        .chars()
        .map(|ch| if ch == ' ' { '.' } else { ch })
        .collect();
    if constraint.starts_with('.') || constraint.starts_with("\\w") {
        constraint.insert(0, '^');
    }
    if constraint.ends_with('.') || constraint.ends_with("\\w") || constraint.ends_with('}') {
        constraint.push('$');
    }
    constraint
}
