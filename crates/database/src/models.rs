//! Database models.

use chrono::{DateTime, SecondsFormat, Utc};
use plan_core::{DayPlan, HealthGoals, Medicine, WeeklyPlan};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{DatabaseError, Result};

/// A registered user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Client-generated identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimeters.
    pub height: f64,
    /// Free-text health conditions, if any.
    #[serde(default)]
    pub health_conditions: Option<String>,
    /// Creation timestamp (RFC 3339). Assigned by the database when empty.
    #[serde(default)]
    pub created_at: String,
}

/// Raw `goals` row; medicines are stored as a JSON array.
#[derive(Debug, Clone, FromRow)]
pub struct GoalsRecord {
    pub user_id: String,
    pub daily_calories: i64,
    pub exercise_minutes: i64,
    pub water_intake: f64,
    pub medicines: String,
    pub created_at: String,
}

impl TryFrom<GoalsRecord> for HealthGoals {
    type Error = DatabaseError;

    fn try_from(record: GoalsRecord) -> Result<Self> {
        let medicines: Vec<Medicine> =
            serde_json::from_str(&record.medicines).map_err(|source| DatabaseError::Json {
                column: "goals.medicines",
                source,
            })?;

        Ok(HealthGoals {
            daily_calories: to_u32("goals.daily_calories", record.daily_calories)?,
            exercise_minutes: to_u32("goals.exercise_minutes", record.exercise_minutes)?,
            water_intake: record.water_intake,
            medicines,
            created_at: parse_timestamp("goals.created_at", &record.created_at)?,
            user_id: record.user_id,
        })
    }
}

/// Raw `weekly_plans` row; days are stored as a JSON array.
#[derive(Debug, Clone, FromRow)]
pub struct PlanRecord {
    pub user_id: String,
    pub days: String,
    pub generated_at: String,
}

impl TryFrom<PlanRecord> for WeeklyPlan {
    type Error = DatabaseError;

    fn try_from(record: PlanRecord) -> Result<Self> {
        let days: Vec<DayPlan> =
            serde_json::from_str(&record.days).map_err(|source| DatabaseError::Json {
                column: "weekly_plans.days",
                source,
            })?;

        Ok(WeeklyPlan {
            days,
            generated_at: parse_timestamp("weekly_plans.generated_at", &record.generated_at)?,
            user_id: record.user_id,
        })
    }
}

/// Format a timestamp the way every table stores it.
pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(column: &'static str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| DatabaseError::Corrupt {
            column,
            value: value.to_string(),
        })
}

fn to_u32(column: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| DatabaseError::Corrupt {
        column,
        value: value.to_string(),
    })
}
