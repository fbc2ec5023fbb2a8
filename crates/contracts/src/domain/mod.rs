pub mod auth;
pub mod category;
pub mod listing;
pub mod location;

// Re-exports
pub use auth::{ApiError, LoginRequest, RegisterRequest, TokenResponse};
pub use category::{CategoryNode, CategoryTree};
pub use listing::{Listing, ListingDraft, ListingImage};
pub use location::{LocationLevel, LocationNode};
