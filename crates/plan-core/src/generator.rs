//! Weekly plan assembly.

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::content;
use crate::error::Result;
use crate::hydration::generate_hydration;
use crate::intensity::Intensity;
use crate::meals::generate_meals;
use crate::medicines::group_by_timing;
use crate::models::{DayOfWeek, DayPlan, HealthGoals, WeeklyPlan};
use crate::random::RandomSource;
use crate::tips::{sample_tips, TIPS_PER_DAY};

/// Builds seven-day plans from health goals.
///
/// The generator holds only its clock; randomness is passed per call so each
/// request can bring its own source.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator<C = SystemClock> {
    clock: C,
}

impl PlanGenerator<SystemClock> {
    /// Generator stamped with wall-clock time.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> PlanGenerator<C> {
    /// Generator stamped with a custom clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Generate a plan for Monday through Sunday.
    ///
    /// Fails without producing a partial plan when `goals` is malformed.
    pub fn generate(&self, goals: &HealthGoals, rng: &mut dyn RandomSource) -> Result<WeeklyPlan> {
        goals.check_shape()?;

        let intensity = Intensity::classify(goals.exercise_minutes);
        let exercises = content::exercises(intensity);
        let medicines = group_by_timing(&goals.medicines);

        debug!(
            user_id = %goals.user_id,
            intensity = intensity.as_str(),
            medicines = medicines.len(),
            "Generating weekly plan"
        );

        let days = DayOfWeek::ALL
            .iter()
            .map(|&day| DayPlan {
                day,
                exercise: exercises[day.index()].to_string(),
                meals: generate_meals(goals.daily_calories, day),
                medicines: medicines.clone(),
                hydration: generate_hydration(goals.water_intake),
                tips: sample_tips(TIPS_PER_DAY, &mut *rng),
            })
            .collect();

        Ok(WeeklyPlan {
            user_id: goals.user_id.clone(),
            days,
            generated_at: self.clock.now(),
        })
    }
}

/// Generate a plan stamped with the current time.
pub fn generate_weekly_plan(goals: &HealthGoals, rng: &mut dyn RandomSource) -> Result<WeeklyPlan> {
    PlanGenerator::new().generate(goals, rng)
}
