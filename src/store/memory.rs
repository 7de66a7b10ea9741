use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ExerciseFilter, Store, StoreError};
use crate::models::{Exercise, NewExercise, User};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// In-process store keeping both collections in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, username: &str) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };

        self.collections.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.collections.read().await.users.clone())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: exercise.user_id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
            created_at: Utc::now(),
        };

        self.collections.write().await.exercises.push(exercise.clone());
        Ok(exercise)
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
        let collections = self.collections.read().await;
        let matching = collections.exercises.iter().filter(|e| filter.matches(e)).cloned();

        Ok(match filter.max_results() {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }
}
