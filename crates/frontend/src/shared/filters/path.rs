//! Canonical route path: `build_path` and `parse_route` are pure inverses
//! over the fixed schema
//! `/listings[/state[/district[/city]]][/category/<slug>]`.
//! Locality never appears in the path; it only affects the listing query.

use super::selection::FilterState;
use contracts::domain::LocationLevel;

pub const ROOT_SEGMENT: &str = "listings";
pub const CATEGORY_SEGMENT: &str = "category";

/// Location and category selection carried by a route path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSelection {
    pub state: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub category_slug: Option<String>,
}

/// Derive the canonical path from the current selection. Only the
/// contiguous selected prefix of the location hierarchy is emitted, so the
/// same selection always yields the same single path.
pub fn build_path(state: &FilterState) -> String {
    let mut segments: Vec<&str> = vec![ROOT_SEGMENT];
    for level in [
        LocationLevel::State,
        LocationLevel::District,
        LocationLevel::City,
    ] {
        match state.location(level) {
            Some(slug) => segments.push(slug),
            None => break,
        }
    }
    if let Some(slug) = state.category_slug() {
        segments.push(CATEGORY_SEGMENT);
        segments.push(slug);
    }
    format!("/{}", segments.join("/"))
}

/// Parse a route path back into a selection. Repeated separators are
/// collapsed. Returns `None` for paths outside the listings schema: wrong
/// root segment, more than three location segments, or a category marker
/// not followed by exactly one slug.
pub fn parse_route(path: &str) -> Option<RouteSelection> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    if segments.next()? != ROOT_SEGMENT {
        return None;
    }
    let mut rest: Vec<&str> = segments.collect();

    let mut route = RouteSelection::default();
    if let Some(pos) = rest.iter().position(|s| *s == CATEGORY_SEGMENT) {
        let after = &rest[pos + 1..];
        if after.len() != 1 {
            return None;
        }
        route.category_slug = Some(after[0].to_string());
        rest.truncate(pos);
    }
    if rest.len() > 3 {
        return None;
    }
    route.state = rest.first().map(|s| s.to_string());
    route.district = rest.get(1).map(|s| s.to_string());
    route.city = rest.get(2).map(|s| s.to_string());
    Some(route)
}
