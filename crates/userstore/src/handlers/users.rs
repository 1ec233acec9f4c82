//! User CRUD handlers.
//!
//! Each handler validates its input, performs at most one read and one write
//! through the repository, and formats the JSON response.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use uuid::Uuid;

use userstore_core::storage::RepositoryError;
use userstore_core::user::{
    CreateUserRequest, MessageResponse, UpdateUserRequest, User, UserResponse,
};

use crate::{handlers::AppError, state::AppState};

/// Parse a path segment as a user id. Anything that is not a UUID cannot
/// name a stored user, so it is reported as missing.
fn parse_uuid(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::from(RepositoryError::user_not_found(raw)))
}

/// Fetch a user or fail with NotFound.
async fn find_user(state: &AppState, uuid: Uuid) -> Result<User, AppError> {
    state
        .users
        .get_user(uuid)
        .await?
        .ok_or_else(|| AppError::from(RepositoryError::user_not_found(uuid)))
}

/// List all users (GET /users).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.scan_users().await?;

    tracing::debug!(count = users.len(), "Listed users");

    Ok(Json(users))
}

/// Create a new user (POST /users).
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Json(payload) = payload?;
    let user = payload.into_user()?;

    state.users.put_user(&user).await?;

    tracing::info!(user_id = %user.uuid, email = %user.email, "Created user");

    Ok(Json(UserResponse::created(user)))
}

/// Get a single user by UUID (GET /users/{uuid}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<User>, AppError> {
    let uuid = parse_uuid(&uuid)?;
    let user = find_user(&state, uuid).await?;

    Ok(Json(user))
}

/// Update a user by UUID (PUT /users/{uuid}).
///
/// An unknown user is reported before the payload is validated. An empty
/// payload returns the stored user without writing.
pub async fn update_user(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Json(payload) = payload?;
    let uuid = parse_uuid(&uuid)?;
    let user = find_user(&state, uuid).await?;

    let changes = payload.into_changes()?;
    if changes.is_empty() {
        return Ok(Json(UserResponse::updated(user)));
    }

    let user = state.users.update_user(uuid, &changes).await?;

    tracing::info!(user_id = %uuid, "Updated user");

    Ok(Json(UserResponse::updated(user)))
}

/// Delete a user by UUID (DELETE /users/{uuid}).
pub async fn delete_user(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let uuid = parse_uuid(&uuid)?;
    find_user(&state, uuid).await?;

    state.users.delete_user(uuid).await?;

    tracing::info!(user_id = %uuid, "Deleted user");

    Ok(Json(MessageResponse::deleted()))
}
