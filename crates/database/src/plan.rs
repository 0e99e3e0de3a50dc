//! Weekly plan storage, one plan per user.

use plan_core::WeeklyPlan;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::error::{owner_violation, DatabaseError, Result};
use crate::models::{format_timestamp, PlanRecord};

/// Insert or replace a user's weekly plan.
///
/// Plans are never merged: the stored days are replaced in full.
pub async fn upsert_plan<'e, E>(executor: E, plan: &WeeklyPlan) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    let days = serde_json::to_string(&plan.days).map_err(|source| DatabaseError::Json {
        column: "weekly_plans.days",
        source,
    })?;

    sqlx::query(
        r#"
        INSERT INTO weekly_plans (user_id, days, generated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(user_id) DO UPDATE SET
            days = excluded.days,
            generated_at = excluded.generated_at
        "#,
    )
    .bind(&plan.user_id)
    .bind(days)
    .bind(format_timestamp(&plan.generated_at))
    .execute(executor)
    .await
    .map_err(|e| owner_violation(e, &plan.user_id))?;

    tracing::info!(user_id = %plan.user_id, "Saved weekly plan");
    Ok(())
}

/// Get a user's weekly plan.
pub async fn get_plan(pool: &SqlitePool, user_id: &str) -> Result<Option<WeeklyPlan>> {
    let record = sqlx::query_as::<_, PlanRecord>(
        r#"
        SELECT user_id, days, generated_at
        FROM weekly_plans
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    record.map(WeeklyPlan::try_from).transpose()
}

/// Delete a user's weekly plan.
///
/// Returns true if a plan was deleted, false if none existed.
pub async fn delete_plan(pool: &SqlitePool, user_id: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM weekly_plans
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
