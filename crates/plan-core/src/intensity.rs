//! Exercise intensity tiers.

use serde::{Deserialize, Serialize};

/// Exercise intensity for a week, derived from daily exercise minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Intense,
}

impl Intensity {
    /// Upper bound (inclusive) of the light tier, in minutes.
    pub const LIGHT_MAX_MINUTES: u32 = 25;
    /// Upper bound (inclusive) of the moderate tier, in minutes.
    pub const MODERATE_MAX_MINUTES: u32 = 40;

    /// Classify a daily exercise target.
    pub fn classify(exercise_minutes: u32) -> Self {
        if exercise_minutes <= Self::LIGHT_MAX_MINUTES {
            Intensity::Light
        } else if exercise_minutes <= Self::MODERATE_MAX_MINUTES {
            Intensity::Moderate
        } else {
            Intensity::Intense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Moderate => "moderate",
            Intensity::Intense => "intense",
        }
    }
}
