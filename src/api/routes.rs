use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::users::user_routes;
use crate::services::{ExerciseService, UserService};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub exercises: ExerciseService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            users: UserService::new(Arc::clone(&store)),
            exercises: ExerciseService::new(store),
        }
    }
}

/// CORS is open to every origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the application: the JSON API under `/api/users`, the landing page
/// at `/` and everything else served from `static_dir`.
pub fn create_routes(store: Arc<dyn Store>, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let landing_page = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .nest("/api/users", user_routes())
        .route_service("/", landing_page)
        .fallback_service(ServeDir::new(static_dir))
        .with_state(AppState::new(store))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
}
