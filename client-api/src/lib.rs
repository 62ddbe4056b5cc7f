//! Axum HTTP layer for the client CRUD service.
//!
//! # Design
//! The store lives behind a single `Arc<RwLock<…>>` injected into handlers
//! via axum `State` — no globals, and every test gets a fresh store from
//! `app()`. The lock guards the store struct as a whole, so id allocation
//! and map insertion happen in one exclusive-access region. Handlers
//! validate first, then call exactly one store operation; the two core
//! error kinds map to 422 and 404 via `ApiError`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

use client_core::{validate, Client, ClientInput, ClientStore, NotFound, ValidationError};

use crate::config::Config;

pub mod config;

pub type Db = Arc<RwLock<ClientStore>>;

/// Build the router with a fresh, empty store.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(ClientStore::new()));
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/clientes", get(list_clients).post(create_client))
        .route(
            "/api/clientes/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .with_state(db)
}

/// Serve the app on `listener` with the configured CORS policy.
pub async fn run(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    let router = app().layer(config.cors_layer());
    axum::serve(listener, router).await
}

/// Errors a handler can surface. Both are expected client conditions and
/// are rendered as structured bodies, not logged as server faults.
enum ApiError {
    Validation(ValidationError),
    NotFound,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<NotFound> for ApiError {
    fn from(_: NotFound) -> Self {
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": err.errors() })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Client not found" })),
            )
                .into_response(),
        }
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello, World!" }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_clients(State(db): State<Db>) -> Json<Vec<Client>> {
    Json(db.read().await.list())
}

async fn create_client(
    State(db): State<Db>,
    Json(input): Json<ClientInput>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let input = validate(input)?;
    let client = db.write().await.create(input);
    Ok((StatusCode::CREATED, Json(client)))
}

async fn get_client(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Client>, ApiError> {
    let client = db.read().await.get(id)?;
    Ok(Json(client))
}

async fn update_client(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ClientInput>,
) -> Result<Json<Client>, ApiError> {
    let input = validate(input)?;
    let client = db.write().await.update(id, input)?;
    Ok(Json(client))
}

async fn delete_client(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    db.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
