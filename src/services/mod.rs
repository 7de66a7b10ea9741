// Request validation and response shaping over the store

pub mod error;
pub mod exercise_service;
pub mod user_service;

pub use error::ServiceError;
pub use exercise_service::ExerciseService;
pub use user_service::UserService;
