use axum::{extract::State, response::Json, routing::get, Router};

use super::exercises::exercise_routes;
use super::extract::Payload;
use super::{ApiError, AppState};
use crate::models::{CreateUserRequest, User};

/// Routes mounted under `/api/users`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .merge(exercise_routes())
}

/// Create a user from a non-empty username
#[tracing::instrument(skip(state, request))]
async fn create_user(
    State(state): State<AppState>,
    Payload(request): Payload<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.create_user(request).await?;
    Ok(Json(user))
}

/// List every stored user
#[tracing::instrument(skip(state))]
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}
