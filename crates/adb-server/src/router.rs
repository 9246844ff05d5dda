use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all catalog endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/artifact", post(handler::create_artifact))
        .route(
            "/artifact/:id",
            get(handler::get_artifact).delete(handler::delete_artifact),
        )
        .route("/artifacts/type/:type", get(handler::get_artifacts_by_type))
        .route("/artifacts/set/:set", get(handler::get_artifacts_by_set))
        .route(
            "/artifacts/type/:type/set/:set",
            get(handler::get_artifacts_by_type_and_set),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
