//! Weekly plan routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use database::{goals, plan};
use plan_core::WeeklyPlan;
use tracing::info;

use super::Success;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Get a user's plan, or `null` when none has been generated.
pub async fn get_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<WeeklyPlan>>> {
    let weekly = plan::get_plan(state.db.pool(), &user_id).await?;
    Ok(Json(weekly))
}

/// Store a client-supplied plan, replacing any existing one.
pub async fn save_plan(
    State(state): State<AppState>,
    body: std::result::Result<Json<WeeklyPlan>, JsonRejection>,
) -> Result<Json<WeeklyPlan>> {
    let Json(body) = body?;
    body.check_complete()?;
    plan::upsert_plan(state.db.pool(), &body).await?;
    Ok(Json(body))
}

/// Regenerate a plan from the user's stored goals.
pub async fn regenerate_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<WeeklyPlan>> {
    let pool = state.db.pool();
    let stored = goals::get_goals(pool, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no goals set for user {}", user_id)))?;

    let weekly = state.generate_plan(&stored)?;
    plan::upsert_plan(pool, &weekly).await?;

    info!(user_id = %user_id, "Plan regenerated");
    Ok(Json(weekly))
}

/// Delete a user's plan.
pub async fn delete_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Success>> {
    plan::delete_plan(state.db.pool(), &user_id).await?;
    Ok(Json(Success::ok()))
}
