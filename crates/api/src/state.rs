//! Application state shared across handlers.

use database::Database;
use plan_core::{HealthGoals, PlanGenerator, SeededRandom, WeeklyPlan};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Weekly plan generator.
    pub generator: PlanGenerator,
    /// Fixed tip seed, if configured.
    pub tip_seed: Option<u64>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, tip_seed: Option<u64>) -> Self {
        Self {
            db,
            generator: PlanGenerator::new(),
            tip_seed,
        }
    }

    /// Generate a plan with a fresh random source for this request.
    pub fn generate_plan(&self, goals: &HealthGoals) -> plan_core::Result<WeeklyPlan> {
        let mut rng = match self.tip_seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        self.generator.generate(goals, &mut rng)
    }
}
