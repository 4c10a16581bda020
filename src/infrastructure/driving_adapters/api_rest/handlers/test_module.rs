//! Test Module Handlers
//!
//! Routes for the placeholder resource. Request bodies are accepted and ignored.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};

use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for test-module endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(find_all))
        .route("/:id", get(find_one).patch(update).delete(remove))
}

fn parse_id(id: &str) -> Result<i64, ApiError> {
    Ok(id.trim().parse()?)
}

#[utoipa::path(
    post,
    path = "/test-module",
    tag = "TestModule",
    responses((status = 200, description = "Placeholder description", body = String))
)]
pub async fn create(State(state): State<AppState>) -> String {
    state.test_module_service.create()
}

#[utoipa::path(
    get,
    path = "/test-module",
    tag = "TestModule",
    responses((status = 200, description = "Placeholder description", body = String))
)]
pub async fn find_all(State(state): State<AppState>) -> String {
    state.test_module_service.find_all()
}

#[utoipa::path(
    get,
    path = "/test-module/{id}",
    tag = "TestModule",
    params(("id" = i64, Path, description = "TestModule ID")),
    responses(
        (status = 200, description = "Placeholder description", body = String),
        (status = 400, description = "Invalid ID")
    )
)]
pub async fn find_one(State(state): State<AppState>, Path(id): Path<String>) -> Result<String, ApiError> {
    Ok(state.test_module_service.find_one(parse_id(&id)?))
}

#[utoipa::path(
    patch,
    path = "/test-module/{id}",
    tag = "TestModule",
    params(("id" = i64, Path, description = "TestModule ID")),
    responses(
        (status = 200, description = "Placeholder description", body = String),
        (status = 400, description = "Invalid ID")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<String>) -> Result<String, ApiError> {
    Ok(state.test_module_service.update(parse_id(&id)?))
}

#[utoipa::path(
    delete,
    path = "/test-module/{id}",
    tag = "TestModule",
    params(("id" = i64, Path, description = "TestModule ID")),
    responses(
        (status = 200, description = "Placeholder description", body = String),
        (status = 400, description = "Invalid ID")
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<String, ApiError> {
    Ok(state.test_module_service.remove(parse_id(&id)?))
}
