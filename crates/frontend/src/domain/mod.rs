pub mod categories;
pub mod listings;
pub mod locations;
