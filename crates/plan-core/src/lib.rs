//! Weekly health plan generation.
//!
//! This crate turns a user's [`HealthGoals`] into a seven-day [`WeeklyPlan`]:
//!
//! - [`Intensity`] - Exercise tier chosen from the requested minutes
//! - [`meals`] / [`hydration`] - Fixed-ratio apportioning of calories and water
//! - [`medicines`] - Grouping of medicines by timing slot
//! - [`tips`] - Per-day sampling from the health tip pool
//! - [`PlanGenerator`] - Assembles everything for Monday through Sunday
//!
//! Generation is synchronous and allocation-only. The two sources of
//! nondeterminism, tip sampling and the `generatedAt` timestamp, are injected
//! through [`RandomSource`] and [`Clock`].
//!
//! # Example
//!
//! ```rust
//! use plan_core::{HealthGoals, Medicine, PlanGenerator, SeededRandom, Timing};
//!
//! # fn main() -> Result<(), plan_core::PlanError> {
//! let goals = HealthGoals::new("user-1", 2000, 30, 2.5)
//!     .with_medicine(Medicine::new("Vitamin D", "1 tablet", Timing::Morning));
//!
//! let mut rng = SeededRandom::new(7);
//! let plan = PlanGenerator::new().generate(&goals, &mut rng)?;
//!
//! assert_eq!(plan.days.len(), 7);
//! assert_eq!(plan.days[0].medicines.morning, vec!["Vitamin D (1 tablet)"]);
//! # Ok(())
//! # }
//! ```

mod clock;
pub mod content;
mod error;
mod generator;
pub mod hydration;
mod intensity;
pub mod meals;
pub mod medicines;
mod models;
mod random;
pub mod tips;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{PlanError, Result};
pub use generator::{generate_weekly_plan, PlanGenerator};
pub use intensity::Intensity;
pub use models::{
    DayOfWeek, DayPlan, HealthGoals, Hydration, Meals, Medicine, MedicineSchedule, Timing,
    WeeklyPlan,
};
pub use random::{RandomSource, SeededRandom};
