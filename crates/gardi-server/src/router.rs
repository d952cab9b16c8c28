use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use gardi_store::FsDocumentStore;

use crate::handler;

/// Build the axum router with all document endpoints.
///
/// Every data route is nested under the tenant path segment; the store is
/// shared across requests as router state.
pub fn build_router(store: Arc<FsDocumentStore>, allow_any_origin: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(handler::health))
        .route("/:user/schemas", get(handler::list_schemas))
        .route("/:user/schemas/new", post(handler::create_schema))
        .route("/:user/schemas/save", post(handler::save_schema))
        .route("/:user/schemas/:id", get(handler::get_schema))
        .route("/:user/instances", get(handler::list_instances))
        .route("/:user/instances/new", post(handler::create_instance))
        .route("/:user/instances/save", post(handler::save_instance))
        .route("/:user/instances/:id", get(handler::get_instance))
        .layer(TraceLayer::new_for_http())
        .with_state(store);

    if allow_any_origin {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST]),
        );
    }
    router
}
