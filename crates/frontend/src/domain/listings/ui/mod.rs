pub mod list;
pub mod sell;
