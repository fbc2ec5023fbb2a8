pub mod api;
pub mod context;
pub mod storage;
pub mod ui;
