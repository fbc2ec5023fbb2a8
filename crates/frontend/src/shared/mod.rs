pub mod api_utils;
pub mod dom_utils;
pub mod filters;
