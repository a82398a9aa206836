pub mod api;
pub mod models;

pub use api::*;
pub use models::*;
