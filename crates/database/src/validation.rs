//! Input validation for user profiles and health goals.

use std::fmt;

use plan_core::{HealthGoals, Medicine};

use crate::models::User;

/// Validation error types.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Numeric value outside its allowed range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Empty value where one is required.
    Empty(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(f, "{} must be between {} and {} (got {})", field, min, max, actual),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for user names.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum allowed length for the health conditions note.
pub const MAX_HEALTH_CONDITIONS_LENGTH: usize = 500;

/// Maximum allowed length for medicine names and dosages.
pub const MAX_MEDICINE_FIELD_LENGTH: usize = 50;

pub const AGE_RANGE: (f64, f64) = (1.0, 150.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (20.0, 500.0);
pub const HEIGHT_CM_RANGE: (f64, f64) = (50.0, 300.0);
pub const DAILY_CALORIES_RANGE: (f64, f64) = (500.0, 10000.0);
pub const EXERCISE_MINUTES_RANGE: (f64, f64) = (5.0, 180.0);
pub const WATER_LITERS_RANGE: (f64, f64) = (0.5, 10.0);

/// Validate a user profile.
pub fn validate_user(user: &User) -> Result<(), ValidationError> {
    require("id", &user.id)?;
    require("name", &user.name)?;
    max_length("name", user.name.trim(), MAX_NAME_LENGTH)?;
    in_range("age", user.age as f64, AGE_RANGE)?;
    in_range("weight", user.weight, WEIGHT_KG_RANGE)?;
    in_range("height", user.height, HEIGHT_CM_RANGE)?;

    if let Some(conditions) = &user.health_conditions {
        max_length("healthConditions", conditions, MAX_HEALTH_CONDITIONS_LENGTH)?;
    }

    Ok(())
}

/// Validate health goals, including every medicine.
pub fn validate_goals(goals: &HealthGoals) -> Result<(), ValidationError> {
    require("userId", &goals.user_id)?;
    in_range(
        "dailyCalories",
        f64::from(goals.daily_calories),
        DAILY_CALORIES_RANGE,
    )?;
    in_range(
        "exerciseMinutes",
        f64::from(goals.exercise_minutes),
        EXERCISE_MINUTES_RANGE,
    )?;
    in_range("waterIntake", goals.water_intake, WATER_LITERS_RANGE)?;

    for medicine in &goals.medicines {
        validate_medicine(medicine)?;
    }

    Ok(())
}

/// Validate a single medicine entry.
pub fn validate_medicine(medicine: &Medicine) -> Result<(), ValidationError> {
    require("medicine name", &medicine.name)?;
    max_length(
        "medicine name",
        medicine.name.trim(),
        MAX_MEDICINE_FIELD_LENGTH,
    )?;
    require("medicine dosage", &medicine.dosage)?;
    max_length(
        "medicine dosage",
        medicine.dosage.trim(),
        MAX_MEDICINE_FIELD_LENGTH,
    )?;
    Ok(())
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field.to_string()));
    }
    Ok(())
}

fn max_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            actual,
        });
    }
    Ok(())
}

fn in_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    // NaN is never contained, so it is rejected here too.
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
            actual: value,
        });
    }
    Ok(())
}
