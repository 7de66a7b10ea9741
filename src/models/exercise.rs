use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::date::readable;
use super::fields;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    #[serde(with = "readable")]
    pub date: NaiveDate,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// A validated exercise ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

/// Raw body of `POST /api/users/:id/exercises`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default, deserialize_with = "fields::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "fields::text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "fields::text")]
    pub date: Option<String>,
}

/// Query string of `GET /api/users/:id/logs`.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Response of exercise creation. `_id` carries the owning user's id.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    #[serde(with = "readable")]
    pub date: NaiveDate,
    #[serde(rename = "_id")]
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ExerciseLog {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub user_id: Uuid,
    pub log: Vec<Exercise>,
}
