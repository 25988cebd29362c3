// ABOUTME: Derived-metric calculators over the body-metric profile
// ABOUTME: BMI, BMR, and macro-split modules with their result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

//! # Intelligence Module
//!
//! Pure, config-driven calculators. Nothing here touches storage or holds
//! state; callers pass profile values in and get typed results back.

/// BMI and BMR calculators
pub mod body_metrics;
/// Macro-split and calorie-adjustment calculators
pub mod macros;

pub use body_metrics::{
    calculate_bmi, calculate_bmr, categorize_bmi, BmiAssessment, BmiCategory, HealthRisk,
};
pub use macros::{
    calculate_macro_split, goal_adjusted_calories, protein_remaining, DietPreference, FitnessGoal,
    MacroSplit, MacroTarget,
};
