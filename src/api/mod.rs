// API routes and handlers

pub mod error;
pub mod exercises;
pub mod extract;
pub mod routes;
pub mod users;

pub use error::ApiError;
pub use routes::{create_routes, AppState};
