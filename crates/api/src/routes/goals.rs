//! Goals routes.
//!
//! Saving goals always regenerates the user's weekly plan.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use database::{goals, validation};
use plan_core::{HealthGoals, WeeklyPlan};
use serde::Serialize;
use tracing::info;

use super::Success;
use crate::error::Result;
use crate::state::AppState;

/// Saved goals and the plan generated from them.
#[derive(Serialize)]
pub struct SavedGoals {
    pub goals: HealthGoals,
    pub plan: WeeklyPlan,
}

/// Get a user's goals, or `null` when none are set.
pub async fn get_goals(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<HealthGoals>>> {
    let goals = goals::get_goals(state.db.pool(), &user_id).await?;
    Ok(Json(goals))
}

/// Save goals and generate a fresh weekly plan.
///
/// The body is decoded by hand so an unknown medicine timing surfaces as a
/// plan error instead of a generic extractor rejection.
pub async fn save_goals(
    State(state): State<AppState>,
    body: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<SavedGoals>> {
    let Json(body) = body?;
    let goals = HealthGoals::from_value(body)?;
    validation::validate_goals(&goals)?;

    let weekly = state.generate_plan(&goals)?;

    goals::upsert_goals_with_plan(state.db.pool(), &goals, &weekly).await?;

    info!(user_id = %goals.user_id, "Goals saved and plan generated");

    Ok(Json(SavedGoals {
        goals,
        plan: weekly,
    }))
}

/// Delete a user's goals. The current plan is left in place.
pub async fn delete_goals(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Success>> {
    goals::delete_goals(state.db.pool(), &user_id).await?;
    Ok(Json(Success::ok()))
}
