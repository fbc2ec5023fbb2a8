pub mod global_context;
pub mod header;

pub use global_context::{use_app_context, AppGlobalContext, LoginSource};
