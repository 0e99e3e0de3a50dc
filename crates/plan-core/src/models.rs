//! Goals and plan data model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Time of day a medicine is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Timing {
    /// All timing slots in schedule order.
    pub const ALL: [Timing; 4] = [
        Timing::Morning,
        Timing::Afternoon,
        Timing::Evening,
        Timing::Night,
    ];

    /// Wire name of the slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timing::Morning => "morning",
            Timing::Afternoon => "afternoon",
            Timing::Evening => "evening",
            Timing::Night => "night",
        }
    }
}

impl FromStr for Timing {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "morning" => Ok(Timing::Morning),
            "afternoon" => Ok(Timing::Afternoon),
            "evening" => Ok(Timing::Evening),
            "night" => Ok(Timing::Night),
            other => Err(PlanError::UnknownTiming(other.to_string())),
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A medicine entry in a user's goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    /// Medicine name (e.g., "Vitamin D").
    pub name: String,
    /// Dosage description (e.g., "1 tablet").
    pub dosage: String,
    /// When during the day it is taken.
    pub timing: Timing,
}

impl Medicine {
    /// Create a medicine entry.
    pub fn new(name: impl Into<String>, dosage: impl Into<String>, timing: Timing) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            timing,
        }
    }
}

/// Daily health goals for a single user.
///
/// Bounds (500-10000 calories, 5-180 minutes, 0.5-10 liters) are checked by
/// the caller before generation; see `database::validation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthGoals {
    /// Owning user.
    pub user_id: String,
    /// Daily calorie target.
    pub daily_calories: u32,
    /// Daily exercise target in minutes.
    pub exercise_minutes: u32,
    /// Daily water target in liters.
    pub water_intake: f64,
    /// Medicines in the order the user entered them.
    #[serde(default)]
    pub medicines: Vec<Medicine>,
    /// When the goals were recorded.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl HealthGoals {
    /// Create goals with no medicines, timestamped now.
    pub fn new(
        user_id: impl Into<String>,
        daily_calories: u32,
        exercise_minutes: u32,
        water_intake: f64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            daily_calories,
            exercise_minutes,
            water_intake,
            medicines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a medicine.
    pub fn with_medicine(mut self, medicine: Medicine) -> Self {
        self.medicines.push(medicine);
        self
    }

    /// Parse goals from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| PlanError::InvalidGoals(e.to_string()))?;
        Self::from_value(value)
    }

    /// Parse goals from an already decoded JSON value.
    ///
    /// An unrecognized medicine timing is reported as
    /// [`PlanError::UnknownTiming`] rather than a generic decode failure.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if let Some(medicines) = value.get("medicines").and_then(|m| m.as_array()) {
            for medicine in medicines {
                if let Some(timing) = medicine.get("timing").and_then(|t| t.as_str()) {
                    timing.parse::<Timing>()?;
                }
            }
        }

        let goals: HealthGoals =
            serde_json::from_value(value).map_err(|e| PlanError::InvalidGoals(e.to_string()))?;
        goals.check_shape()?;
        Ok(goals)
    }

    /// Check the structural shape the generator depends on.
    pub fn check_shape(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(PlanError::InvalidGoals("userId is empty".to_string()));
        }
        if !self.water_intake.is_finite() {
            return Err(PlanError::InvalidGoals(
                "waterIntake is not a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Named day of a labeled week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Days in plan order; a day's position is its `dayIndex`.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Full English name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// Position in the week, Monday = 0.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal suggestions for one day, each annotated with calories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meals {
    /// Breakfast, 30% of daily calories.
    pub breakfast: String,
    /// Lunch, 40% of daily calories.
    pub lunch: String,
    /// Dinner, 30% of daily calories.
    pub dinner: String,
}

/// Medicines grouped by timing slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineSchedule {
    /// `"name (dosage)"` entries taken in the morning.
    pub morning: Vec<String>,
    /// Entries taken in the afternoon.
    pub afternoon: Vec<String>,
    /// Entries taken in the evening.
    pub evening: Vec<String>,
    /// Entries taken at night.
    pub night: Vec<String>,
}

impl MedicineSchedule {
    /// Entries for one slot.
    pub fn slot(&self, timing: Timing) -> &[String] {
        match timing {
            Timing::Morning => &self.morning,
            Timing::Afternoon => &self.afternoon,
            Timing::Evening => &self.evening,
            Timing::Night => &self.night,
        }
    }

    pub(crate) fn slot_mut(&mut self, timing: Timing) -> &mut Vec<String> {
        match timing {
            Timing::Morning => &mut self.morning,
            Timing::Afternoon => &mut self.afternoon,
            Timing::Evening => &mut self.evening,
            Timing::Night => &mut self.night,
        }
    }

    /// Total number of scheduled entries across all slots.
    pub fn len(&self) -> usize {
        Timing::ALL.iter().map(|t| self.slot(*t).len()).sum()
    }

    /// True when no slot has an entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Water targets for one day, each annotated with liters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hydration {
    /// Morning target, 35% of the daily volume.
    pub morning: String,
    /// Afternoon target, 40% of the daily volume.
    pub afternoon: String,
    /// Evening target, 25% of the daily volume.
    pub evening: String,
}

/// Schedule for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Weekday this entry covers.
    pub day: DayOfWeek,
    /// Exercise suggestion for the user's intensity tier.
    pub exercise: String,
    /// Meal suggestions.
    pub meals: Meals,
    /// Medicines grouped by timing slot.
    pub medicines: MedicineSchedule,
    /// Water targets.
    pub hydration: Hydration,
    /// Distinct tips drawn for the day.
    pub tips: Vec<String>,
}

/// A generated seven-day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// Owning user.
    pub user_id: String,
    /// Monday through Sunday.
    pub days: Vec<DayPlan>,
    /// When the plan was generated.
    pub generated_at: DateTime<Utc>,
}

impl WeeklyPlan {
    /// Look up the plan for a weekday.
    pub fn day(&self, day: DayOfWeek) -> Option<&DayPlan> {
        self.days.get(day.index()).filter(|plan| plan.day == day)
    }

    /// Check that the plan holds exactly one entry per weekday, in order.
    pub fn check_complete(&self) -> Result<()> {
        if self.days.len() != DayOfWeek::ALL.len() {
            return Err(PlanError::IncompleteWeek(self.days.len()));
        }
        for (index, (plan, expected)) in self.days.iter().zip(DayOfWeek::ALL).enumerate() {
            if plan.day != expected {
                return Err(PlanError::MisorderedDay {
                    index,
                    expected: expected.as_str(),
                    found: plan.day.as_str(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_round_trip_names() {
        for timing in Timing::ALL {
            assert_eq!(timing.as_str().parse::<Timing>().unwrap(), timing);
        }
        assert!(matches!(
            "noon".parse::<Timing>(),
            Err(PlanError::UnknownTiming(ref t)) if t == "noon"
        ));
    }

    #[test]
    fn test_goals_from_json() {
        let goals = HealthGoals::from_json(
            r#"{
                "userId": "u1",
                "dailyCalories": 2000,
                "exerciseMinutes": 30,
                "waterIntake": 2.5,
                "medicines": [{"name": "Vitamin D", "dosage": "1 tablet", "timing": "morning"}],
                "createdAt": "2026-01-05T08:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(goals.user_id, "u1");
        assert_eq!(goals.daily_calories, 2000);
        assert_eq!(goals.medicines[0].timing, Timing::Morning);
        assert_eq!(goals.created_at.to_rfc3339(), "2026-01-05T08:00:00+00:00");
    }

    #[test]
    fn test_goals_from_json_defaults() {
        let goals = HealthGoals::from_json(
            r#"{"userId": "u1", "dailyCalories": 1800, "exerciseMinutes": 20, "waterIntake": 2}"#,
        )
        .unwrap();
        assert!(goals.medicines.is_empty());
    }

    #[test]
    fn test_goals_missing_field() {
        let result = HealthGoals::from_json(r#"{"userId": "u1", "dailyCalories": 2000}"#);
        assert!(matches!(result, Err(PlanError::InvalidGoals(_))));
    }

    #[test]
    fn test_goals_unknown_timing() {
        let result = HealthGoals::from_json(
            r#"{
                "userId": "u1",
                "dailyCalories": 2000,
                "exerciseMinutes": 30,
                "waterIntake": 2.5,
                "medicines": [{"name": "Iron", "dosage": "1 tablet", "timing": "lunchtime"}]
            }"#,
        );
        assert!(matches!(result, Err(PlanError::UnknownTiming(ref t)) if t == "lunchtime"));
    }

    #[test]
    fn test_goals_empty_user() {
        let goals = HealthGoals::new("  ", 2000, 30, 2.5);
        assert!(matches!(goals.check_shape(), Err(PlanError::InvalidGoals(_))));
    }

    #[test]
    fn test_serialized_field_names() {
        let goals = HealthGoals::new("u1", 2000, 30, 2.5);
        let value = serde_json::to_value(&goals).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("dailyCalories").is_some());
        assert!(value.get("exerciseMinutes").is_some());
        assert!(value.get("waterIntake").is_some());
        assert_eq!(
            serde_json::to_value(DayOfWeek::Wednesday).unwrap(),
            serde_json::json!("Wednesday")
        );
    }

    #[test]
    fn test_day_index() {
        for (i, day) in DayOfWeek::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }
}
