//! Persistence port for users and their exercises.
//!
//! Handlers only ever see `Arc<dyn Store>`, so the Postgres adapter used in
//! production and the in-memory adapter used by tests are interchangeable.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Exercise, NewExercise, User};

pub mod filter;
pub mod memory;
pub mod postgres;

pub use filter::{ExerciseFilter, Predicate};
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),
    /// The backend could not be reached at all: no connection, pool
    /// exhausted or closed.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(error.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, username: &str) -> Result<User, StoreError>;

    /// All users, in the order the backend returns them.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError>;

    /// Exercises matching every predicate of `filter`, in insertion order,
    /// truncated to the filter's limit.
    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError>;
}
