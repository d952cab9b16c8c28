//! HTTP server for the gardi document backend.
//!
//! Exposes the three store verbs -- fetch-by-key, upsert-by-key, list-keys --
//! for schemas and instances, nested under a tenant path segment. The store
//! reports typed errors; translation into transport-level responses lives in
//! [`error`].

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::Server;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use gardi_store::FsDocumentStore;

    fn test_router() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FsDocumentStore::open(dir.path()).unwrap());
        let router = crate::router::build_router(store, false);
        (dir, router)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (_dir, app) = test_router();
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_then_fetch_schema() {
        let (_dir, app) = test_router();

        let response = app
            .clone()
            .oneshot(post_json(
                "/alice/schemas/new",
                json!({"name": "Test", "description": "A test schema"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["name"], "Test");
        assert_eq!(created["version"], 1);
        assert_eq!(created["user_version"], 1);
        let id = created["_id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(get(&format!("/alice/schemas/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn missing_schema_is_404_with_error_body() {
        let (_dir, app) = test_router();
        let response = app.oneshot(get("/alice/schemas/s2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn list_schemas_for_fresh_user_is_empty() {
        let (_dir, app) = test_router();
        let response = app.oneshot(get("/carol/schemas")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn list_schemas_returns_created_ids() {
        let (_dir, app) = test_router();

        let mut ids = Vec::new();
        for name in ["First", "Second"] {
            let response = app
                .clone()
                .oneshot(post_json("/alice/schemas/new", json!({"name": name})))
                .await
                .unwrap();
            ids.push(body_json(response).await["_id"].as_str().unwrap().to_string());
        }

        let response = app.oneshot(get("/alice/schemas")).await.unwrap();
        let mut listed: Vec<String> = serde_json::from_value(body_json(response).await).unwrap();
        listed.sort();
        ids.sort();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn save_schema_upserts_by_its_id() {
        let (_dir, app) = test_router();

        let response = app
            .clone()
            .oneshot(post_json("/alice/schemas/new", json!({"name": "Before"})))
            .await
            .unwrap();
        let mut schema = body_json(response).await;
        let id = schema["_id"].as_str().unwrap().to_string();

        schema["name"] = json!("After");
        schema["user_version"] = json!(2);
        let response = app
            .clone()
            .oneshot(post_json("/alice/schemas/save", schema))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get(&format!("/alice/schemas/{id}")))
            .await
            .unwrap();
        let fetched = body_json(response).await;
        assert_eq!(fetched["name"], "After");
        assert_eq!(fetched["user_version"], 2);
    }

    #[tokio::test]
    async fn instance_creation_requires_existing_schema() {
        let (_dir, app) = test_router();
        let response = app
            .oneshot(post_json(
                "/alice/instances/new",
                json!({"name": "Hero", "schema_id": "does-not-exist"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_then_fetch_instance() {
        let (_dir, app) = test_router();

        let response = app
            .clone()
            .oneshot(post_json("/alice/schemas/new", json!({"name": "Sheet"})))
            .await
            .unwrap();
        let schema_id = body_json(response).await["_id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(post_json(
                "/alice/instances/new",
                json!({"name": "Hero", "description": "", "schema_id": schema_id}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let instance = body_json(response).await;
        assert_eq!(instance["schema_id"], json!(schema_id));
        assert_eq!(instance["user_id"], "alice");
        let id = instance["_id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(get(&format!("/alice/instances/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, instance);

        let response = app.oneshot(get("/alice/instances")).await.unwrap();
        assert_eq!(body_json(response).await, json!([id]));
    }

    #[tokio::test]
    async fn tenants_do_not_see_each_other() {
        let (_dir, app) = test_router();

        let response = app
            .clone()
            .oneshot(post_json("/alice/schemas/new", json!({"name": "Private"})))
            .await
            .unwrap();
        let id = body_json(response).await["_id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(get(&format!("/bob/schemas/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(get("/bob/schemas")).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn traversal_user_segment_is_400() {
        let (_dir, app) = test_router();
        // Percent-encoded separator decodes to "../alice" in the path param.
        let response = app.oneshot(get("/..%2Falice/schemas")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
