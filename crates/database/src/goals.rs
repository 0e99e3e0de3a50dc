//! Health goals storage, one record per user.

use plan_core::{HealthGoals, WeeklyPlan};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::error::{owner_violation, DatabaseError, Result};
use crate::models::{format_timestamp, GoalsRecord};
use crate::plan::upsert_plan;

/// Insert or replace a user's goals.
///
/// The previous record, if any, is overwritten in full.
pub async fn upsert_goals<'e, E>(executor: E, goals: &HealthGoals) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    let medicines = serde_json::to_string(&goals.medicines).map_err(|source| DatabaseError::Json {
        column: "goals.medicines",
        source,
    })?;

    sqlx::query(
        r#"
        INSERT INTO goals (user_id, daily_calories, exercise_minutes, water_intake, medicines, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(user_id) DO UPDATE SET
            daily_calories = excluded.daily_calories,
            exercise_minutes = excluded.exercise_minutes,
            water_intake = excluded.water_intake,
            medicines = excluded.medicines,
            created_at = excluded.created_at
        "#,
    )
    .bind(&goals.user_id)
    .bind(i64::from(goals.daily_calories))
    .bind(i64::from(goals.exercise_minutes))
    .bind(goals.water_intake)
    .bind(medicines)
    .bind(format_timestamp(&goals.created_at))
    .execute(executor)
    .await
    .map_err(|e| owner_violation(e, &goals.user_id))?;

    tracing::info!(
        user_id = %goals.user_id,
        medicines = goals.medicines.len(),
        "Saved goals"
    );
    Ok(())
}

/// Store goals together with the plan generated from them.
///
/// Both writes commit in one transaction. On failure neither is applied and
/// any previous goals and plan stay paired.
pub async fn upsert_goals_with_plan(
    pool: &SqlitePool,
    goals: &HealthGoals,
    plan: &WeeklyPlan,
) -> Result<()> {
    let mut tx = pool.begin().await?;
    upsert_goals(&mut *tx, goals).await?;
    upsert_plan(&mut *tx, plan).await?;
    tx.commit().await?;
    Ok(())
}

/// Get a user's goals.
pub async fn get_goals(pool: &SqlitePool, user_id: &str) -> Result<Option<HealthGoals>> {
    let record = sqlx::query_as::<_, GoalsRecord>(
        r#"
        SELECT user_id, daily_calories, exercise_minutes, water_intake, medicines, created_at
        FROM goals
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    record.map(HealthGoals::try_from).transpose()
}

/// Delete a user's goals.
///
/// Returns true if goals were deleted, false if none existed.
pub async fn delete_goals(pool: &SqlitePool, user_id: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM goals
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
