//! Hierarchical filter state for the listings view.
//!
//! Owns the selection across the two hierarchies (location:
//! state > district > city > locality; category > subcategory) plus the
//! free-text and price filters, and derives the canonical route path and
//! listing query from it. Pure Rust, no UI types — the reactive boundary
//! lives in `layout::global_context`.

pub mod controller;
pub mod path;
pub mod query;
pub mod selection;

pub use controller::{Effect, FilterController, SlugResolution};
pub use path::{build_path, parse_route, RouteSelection};
pub use query::build_query;
pub use selection::FilterState;
