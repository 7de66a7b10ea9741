use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use super::extract::{Payload, QueryParams};
use super::{ApiError, AppState};
use crate::models::{CreateExerciseRequest, ExerciseLog, ExerciseResponse, LogQuery};

pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/exercises", post(add_exercise))
        .route("/:id/logs", get(get_log))
}

/// Record an exercise for an existing user
#[tracing::instrument(skip(state, request))]
async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Payload(request): Payload<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let response = state.exercises.add_exercise(&user_id, request).await?;
    Ok(Json(response))
}

/// Fetch a user's exercise log, optionally bounded by date and count
#[tracing::instrument(skip(state))]
async fn get_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    QueryParams(query): QueryParams<LogQuery>,
) -> Result<Json<ExerciseLog>, ApiError> {
    let log = state.exercises.get_log(&user_id, query).await?;
    Ok(Json(log))
}
