pub mod api;
pub mod calc;
pub mod models;
pub mod store;
