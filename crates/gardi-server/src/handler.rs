use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use gardi_store::{Collection, DocumentStore, DocumentStoreExt, FsDocumentStore};
use gardi_types::{Instance, Schema};

use crate::error::ServerResult;

/// Request body for creating a schema.
#[derive(Debug, Deserialize)]
pub struct NewSchemaRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for creating an instance of an existing schema.
#[derive(Debug, Deserialize)]
pub struct NewInstanceRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub schema_id: String,
}

/// Health check handler.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

pub async fn get_schema(
    State(store): State<Arc<FsDocumentStore>>,
    Path((user, id)): Path<(String, String)>,
) -> ServerResult<Json<Schema>> {
    let schema = store.get(Collection::Schemas, &user, &id)?;
    Ok(Json(schema))
}

pub async fn create_schema(
    State(store): State<Arc<FsDocumentStore>>,
    Path(user): Path<String>,
    Json(req): Json<NewSchemaRequest>,
) -> ServerResult<Json<Schema>> {
    let schema = Schema::new(req.name, req.description);
    store.set(Collection::Schemas, &user, schema.id.as_str(), &schema)?;
    info!(user = %user, schema = %schema.id, "created schema");
    Ok(Json(schema))
}

pub async fn save_schema(
    State(store): State<Arc<FsDocumentStore>>,
    Path(user): Path<String>,
    Json(schema): Json<Schema>,
) -> ServerResult<&'static str> {
    store.set(Collection::Schemas, &user, schema.id.as_str(), &schema)?;
    Ok("schema saved")
}

pub async fn list_schemas(
    State(store): State<Arc<FsDocumentStore>>,
    Path(user): Path<String>,
) -> ServerResult<Json<Vec<String>>> {
    Ok(Json(store.list(Collection::Schemas, &user)?))
}

// ---------------------------------------------------------------------------
// Instances
// ---------------------------------------------------------------------------

pub async fn get_instance(
    State(store): State<Arc<FsDocumentStore>>,
    Path((user, id)): Path<(String, String)>,
) -> ServerResult<Json<Instance>> {
    let instance = store.get(Collection::Instances, &user, &id)?;
    Ok(Json(instance))
}

pub async fn create_instance(
    State(store): State<Arc<FsDocumentStore>>,
    Path(user): Path<String>,
    Json(req): Json<NewInstanceRequest>,
) -> ServerResult<Json<Instance>> {
    // The referenced schema must exist; a dangling id is a 404, not a
    // silently-broken instance.
    let schema: Schema = store.get(Collection::Schemas, &user, &req.schema_id)?;

    let instance = Instance::new(schema.id, &user, req.name, req.description);
    store.set(Collection::Instances, &user, instance.id.as_str(), &instance)?;
    info!(user = %user, instance = %instance.id, schema = %instance.schema_id, "created instance");
    Ok(Json(instance))
}

pub async fn save_instance(
    State(store): State<Arc<FsDocumentStore>>,
    Path(user): Path<String>,
    Json(instance): Json<Instance>,
) -> ServerResult<&'static str> {
    store.set(Collection::Instances, &user, instance.id.as_str(), &instance)?;
    Ok("instance saved")
}

pub async fn list_instances(
    State(store): State<Arc<FsDocumentStore>>,
    Path(user): Path<String>,
) -> ServerResult<Json<Vec<String>>> {
    Ok(Json(store.list(Collection::Instances, &user)?))
}
