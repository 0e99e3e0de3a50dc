//! Static content: exercise routines, meal suggestions, and health tips.
//!
//! Tables are indexed by `dayIndex` (Monday = 0).

use crate::intensity::Intensity;

/// Exercise routines for light weeks.
pub const LIGHT_EXERCISES: [&str; 7] = [
    "20 min gentle walk + 10 min stretching",
    "15 min yoga flow + 10 min meditation",
    "20 min slow cycling + light stretches",
    "15 min swimming + water exercises",
    "25 min tai chi session",
    "20 min nature walk + breathing exercises",
    "Rest day - light stretching only",
];

/// Exercise routines for moderate weeks.
pub const MODERATE_EXERCISES: [&str; 7] = [
    "30 min brisk walk + 15 min core workout",
    "25 min HIIT cardio + 10 min stretching",
    "30 min home strength training",
    "35 min cycling + 10 min cool down",
    "30 min dance workout + stretching",
    "25 min jogging + 15 min yoga",
    "40 min swimming + light cardio",
];

/// Exercise routines for intense weeks.
pub const INTENSE_EXERCISES: [&str; 7] = [
    "45 min running + 15 min strength",
    "50 min CrossFit style workout",
    "40 min weight training + 20 min cardio",
    "60 min cycling + hill intervals",
    "45 min boxing workout + core",
    "50 min circuit training",
    "30 min active recovery + mobility",
];

pub const BREAKFASTS: [&str; 7] = [
    "Oatmeal with berries, nuts & honey",
    "Greek yogurt parfait with granola",
    "Avocado toast with poached eggs",
    "Smoothie bowl with fruits & seeds",
    "Whole grain pancakes with fruit",
    "Veggie omelette with whole wheat toast",
    "Chia pudding with mango",
];

pub const LUNCHES: [&str; 7] = [
    "Grilled chicken salad with quinoa",
    "Mediterranean wrap with hummus",
    "Buddha bowl with roasted vegetables",
    "Salmon with brown rice & greens",
    "Turkey sandwich on whole grain",
    "Lentil soup with mixed salad",
    "Stir-fried tofu with vegetables",
];

pub const DINNERS: [&str; 7] = [
    "Baked fish with roasted vegetables",
    "Lean beef stir-fry with brown rice",
    "Grilled chicken with sweet potato",
    "Vegetable curry with basmati rice",
    "Pasta primavera with olive oil",
    "Turkey meatballs with zucchini noodles",
    "Stuffed bell peppers with quinoa",
];

/// Pool the daily tips are drawn from.
pub const HEALTH_TIPS: [&str; 14] = [
    "Get 7-8 hours of quality sleep tonight.",
    "Take short breaks every hour if working at a desk.",
    "Practice deep breathing for 5 minutes today.",
    "Add more leafy greens to your meals.",
    "Limit screen time 1 hour before bed.",
    "Take a 10-minute walk after lunch.",
    "Stay consistent with your medicine schedule.",
    "Choose whole foods over processed options.",
    "Listen to your body and rest when needed.",
    "Keep healthy snacks handy to avoid junk food.",
    "Stretch for 5 minutes every morning.",
    "Stay positive - mental health matters too!",
    "Track your progress to stay motivated.",
    "Meal prep on weekends to save time.",
];

/// Exercise table for an intensity tier.
pub fn exercises(intensity: Intensity) -> &'static [&'static str; 7] {
    match intensity {
        Intensity::Light => &LIGHT_EXERCISES,
        Intensity::Moderate => &MODERATE_EXERCISES,
        Intensity::Intense => &INTENSE_EXERCISES,
    }
}
