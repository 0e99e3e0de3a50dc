//! Water apportioning across the day.

use crate::models::Hydration;

pub const MORNING_RATIO: f64 = 0.35;
pub const AFTERNOON_RATIO: f64 = 0.40;
pub const EVENING_RATIO: f64 = 0.25;

pub const MORNING_GUIDANCE: &str = "2 glasses with breakfast, 1-2 mid-morning";
pub const AFTERNOON_GUIDANCE: &str = "Before & after lunch, during exercise";
pub const EVENING_GUIDANCE: &str = "With dinner, avoid excess before bed";

/// Build the hydration targets for a day. Does not vary by weekday.
pub fn generate_hydration(water_intake: f64) -> Hydration {
    Hydration {
        morning: label(water_intake * MORNING_RATIO, MORNING_GUIDANCE),
        afternoon: label(water_intake * AFTERNOON_RATIO, AFTERNOON_GUIDANCE),
        evening: label(water_intake * EVENING_RATIO, EVENING_GUIDANCE),
    }
}

/// Format liters to one decimal place, rounding half up.
///
/// `format!("{:.1}")` alone rounds exact ties to even (0.25 -> "0.2").
pub fn format_liters(liters: f64) -> String {
    let tenths = (liters * 10.0).round();
    format!("{:.1}", tenths / 10.0)
}

fn label(liters: f64, guidance: &str) -> String {
    format!("{}L - {}", format_liters(liters), guidance)
}
