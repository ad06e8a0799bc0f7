pub mod models;
pub mod prompts;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub use routes::AppState;

/// Build the application router.
///
/// The completion handler is injected so tests can substitute a mock; the
/// CORS layer is permissive, matching the demo deployment.
pub fn app(handler: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/api/plan", post(routes::create_travel_plan))
        .route("/api/recommend", post(routes::get_destination_recommendations))
        .layer(cors)
        .with_state(handler)
}
