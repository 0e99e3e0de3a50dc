//! User routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use database::{user, validation, User};
use tracing::info;

use super::Success;
use crate::error::Result;
use crate::state::AppState;

/// List all users, newest first.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = user::list_users(state.db.pool()).await?;
    Ok(Json(users))
}

/// Get a single user, or `null` when unknown.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<User>>> {
    let user = user::find_user(state.db.pool(), &id).await?;
    Ok(Json(user))
}

/// Create or update a user profile.
pub async fn save_user(
    State(state): State<AppState>,
    body: std::result::Result<Json<User>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(body) = body?;
    validation::validate_user(&body)?;
    let saved = user::upsert_user(state.db.pool(), &body).await?;
    Ok(Json(saved))
}

/// Delete a user together with their goals and plan.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Success>> {
    user::delete_user(state.db.pool(), &id).await?;
    info!(user_id = %id, "User removed via API");
    Ok(Json(Success::ok()))
}
