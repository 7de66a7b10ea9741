use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{ExerciseFilter, Predicate, Store, StoreError};
use crate::models::{Exercise, NewExercise, User};

const USER_COLUMNS: &str = "id, username, created_at";
const EXERCISE_COLUMNS: &str = "id, user_id, description, duration, date, created_at";

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS "user" (
        seq BIGSERIAL,
        id UUID PRIMARY KEY,
        username TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS exercise (
        seq BIGSERIAL,
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        description TEXT NOT NULL,
        duration BIGINT NOT NULL,
        date DATE NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS exercise_user_date_idx ON exercise (user_id, date)",
];

/// Postgres-backed store. The `user` and `exercise` tables have no foreign
/// key between them; ownership is checked by the services.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates both tables when they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    fn exercise_query(filter: &ExerciseFilter) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!("SELECT {EXERCISE_COLUMNS} FROM exercise WHERE "));

        {
            let mut conditions = query.separated(" AND ");
            for predicate in filter.predicates() {
                match *predicate {
                    Predicate::UserId(id) => {
                        conditions.push("user_id = ").push_bind_unseparated(id);
                    }
                    Predicate::DateFrom(from) => {
                        conditions.push("date >= ").push_bind_unseparated(from);
                    }
                    Predicate::DateTo(to) => {
                        conditions.push("date <= ").push_bind_unseparated(to);
                    }
                }
            }
        }

        query.push(" ORDER BY seq");
        if let Some(limit) = filter.max_results() {
            query.push(" LIMIT ").push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }
        query
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, username: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"INSERT INTO "user" (id, username) VALUES ($1, $2) RETURNING {USER_COLUMNS}"#
        ))
        .bind(Uuid::new_v4())
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            r#"SELECT {USER_COLUMNS} FROM "user" ORDER BY seq"#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"SELECT {USER_COLUMNS} FROM "user" WHERE id = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            r#"
            INSERT INTO exercise (id, user_id, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {EXERCISE_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(exercise.user_id)
        .bind(exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(exercise)
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
        let mut query = Self::exercise_query(filter);
        let exercises = query
            .build_query_as::<Exercise>()
            .fetch_all(&self.pool)
            .await?;

        Ok(exercises)
    }
}
