//! User Handlers
//!
//! HTTP handlers for user CRUD operations. No authentication is enforced.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::domain::models::user::UserId;
use crate::infrastructure::driving_adapters::api_rest::dto::user::{CreateUserDto, UserResponseDto};
use crate::infrastructure::driving_adapters::api_rest::extractors::ValidatedBody;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(find_all_users))
        .route("/:id", get(find_user_by_id).delete(remove_user))
}

/// POST /user - Create a new user
///
/// # Responses
///
/// * 201 Created - User created successfully
/// * 400 Bad Request - Validation error
/// * 413 Payload Too Large - Body over the configured limit
/// * 500 Internal Server Error - Storage failure
#[utoipa::path(
    post,
    path = "/user",
    tag = "User",
    request_body(
        content = CreateUserDto,
        content_type = "application/json",
        description = "Also accepted as application/x-www-form-urlencoded"
    ),
    responses(
        (status = 201, description = "User created", body = UserResponseDto),
        (status = 400, description = "Validation error"),
        (status = 413, description = "Body too large")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    let user = state.create_user_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::from(user))))
}

/// GET /user - List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "User",
    responses((status = 200, description = "All users", body = [UserResponseDto]))
)]
#[axum::debug_handler]
pub async fn find_all_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponseDto>>, ApiError> {
    let users = state.get_users_use_case.execute().await?;

    Ok(Json(users.iter().map(UserResponseDto::from).collect()))
}

/// GET /user/:id - Get a user by ID
///
/// # Responses
///
/// * 200 OK - The user, or `null` when no user has this ID
/// * 400 Bad Request - ID is not an integer
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "User",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user, or null when absent", body = UserResponseDto),
        (status = 400, description = "Invalid ID")
    )
)]
#[axum::debug_handler]
pub async fn find_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<UserResponseDto>>, ApiError> {
    let user_id = UserId::try_from(id.as_str())?;

    let user = state.get_user_by_id_use_case.execute(user_id).await?;

    Ok(Json(user.map(UserResponseDto::from)))
}

/// DELETE /user/:id - Delete a user
///
/// # Responses
///
/// * 200 OK - Empty body, whether or not the user existed
/// * 400 Bad Request - ID is not an integer
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "User",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User removed (or already absent)"),
        (status = 400, description = "Invalid ID")
    )
)]
#[axum::debug_handler]
pub async fn remove_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let user_id = UserId::try_from(id.as_str())?;

    state.delete_user_use_case.execute(user_id).await?;

    Ok(StatusCode::OK)
}
