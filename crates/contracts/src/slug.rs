//! Slug derivation for nodes the backend ships without one.
//!
//! The region service returns `{code, name}` rows only, so URL-safe slugs
//! are derived on the client. `slugify` must be idempotent: a slug taken
//! from a route and slugified again yields the same string.

/// Derive a URL-safe slug from a display name.
/// Example: "Los Angeles County" -> "los-angeles-county"
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
