//! Calorie apportioning across breakfast, lunch, and dinner.

use crate::content::{BREAKFASTS, DINNERS, LUNCHES};
use crate::models::{DayOfWeek, Meals};

/// Share of daily calories for breakfast.
pub const BREAKFAST_RATIO: f64 = 0.30;
/// Share of daily calories for lunch.
pub const LUNCH_RATIO: f64 = 0.40;
/// Share of daily calories for dinner.
pub const DINNER_RATIO: f64 = 0.30;

/// Calories for one meal, rounded half up.
///
/// Each meal is rounded on its own, so the three amounts may differ from the
/// daily target by a calorie or two.
pub fn meal_calories(daily_calories: u32, ratio: f64) -> u32 {
    (f64::from(daily_calories) * ratio).round() as u32
}

/// Build the meals for a day.
pub fn generate_meals(daily_calories: u32, day: DayOfWeek) -> Meals {
    let day_index = day.index();
    Meals {
        breakfast: label(
            BREAKFASTS[day_index],
            meal_calories(daily_calories, BREAKFAST_RATIO),
        ),
        lunch: label(LUNCHES[day_index], meal_calories(daily_calories, LUNCH_RATIO)),
        dinner: label(DINNERS[day_index], meal_calories(daily_calories, DINNER_RATIO)),
    }
}

fn label(suggestion: &str, calories: u32) -> String {
    format!("{} (~{} cal)", suggestion, calories)
}
