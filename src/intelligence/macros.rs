// ABOUTME: Macro-nutrient split calculator driven by diet preference and goal
// ABOUTME: Also goal calorie adjustment and remaining-protein arithmetic
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 GymFit

//! Macro Split Module
//!
//! Converts a daily calorie target into gram targets for protein, carbs, and
//! fat using fixed ratio tables keyed by diet preference and goal, with
//! 4/4/9 kcal-per-gram conversions.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::MacroSplitConfig;
use crate::constants::nutrition;
use crate::errors::AppError;

/// Dietary preference driving the ratio table
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    /// No restriction
    Standard,
    /// No meat
    Vegetarian,
    /// No animal products
    Vegan,
    /// Ketogenic; overrides the goal ratio
    Keto,
    /// Paleolithic
    Paleo,
}

impl DietPreference {
    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
        }
    }
}

impl Display for DietPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DietPreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "keto" => Ok(Self::Keto),
            "paleo" => Ok(Self::Paleo),
            _ => Err(AppError::invalid_input(format!("Invalid diet preference: {s}")).into()),
        }
    }
}

/// Weight goal driving the ratio table and calorie adjustment
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl FitnessGoal {
    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl Display for FitnessGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(AppError::invalid_input(format!("Invalid fitness goal: {s}")).into()),
        }
    }
}

/// One macro's gram and calorie targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTarget {
    /// Daily grams
    pub grams: u32,
    /// Calories those grams supply
    pub calories: u32,
}

/// A complete daily macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// The calorie target the split was computed from
    pub total_calories: u32,
    /// Protein target
    pub protein: MacroTarget,
    /// Carbohydrate target
    pub carbs: MacroTarget,
    /// Fat target
    pub fat: MacroTarget,
}

/// Split a calorie target into per-macro gram targets
///
/// Formula per macro: grams = round(calories x ratio / kcal-per-gram) with
/// 4 kcal/g for protein and carbs and 9 kcal/g for fat. The ratio comes from
/// the (preference, goal) table; keto takes precedence over the goal.
///
/// # Arguments
/// * `calories` - Daily calorie target
/// * `preference` - Diet preference
/// * `goal` - Weight goal
/// * `config` - Ratio tables
///
/// # Errors
///
/// Returns an error if `calories` is zero
pub fn calculate_macro_split(
    calories: u32,
    preference: DietPreference,
    goal: FitnessGoal,
    config: &MacroSplitConfig,
) -> Result<MacroSplit, AppError> {
    if calories == 0 {
        return Err(AppError::invalid_input(
            "Calories must be greater than zero",
        ));
    }

    let ratio = config.ratio_for(preference, goal);
    let total = f64::from(calories);

    Ok(MacroSplit {
        total_calories: calories,
        protein: macro_target(total, ratio.protein, nutrition::KCAL_PER_GRAM_PROTEIN),
        carbs: macro_target(total, ratio.carbs, nutrition::KCAL_PER_GRAM_CARBS),
        fat: macro_target(total, ratio.fat, nutrition::KCAL_PER_GRAM_FAT),
    })
}

fn macro_target(total_calories: f64, ratio: f64, kcal_per_gram: f64) -> MacroTarget {
    let calories = total_calories * ratio;
    MacroTarget {
        grams: (calories / kcal_per_gram).round() as u32,
        calories: calories.round() as u32,
    }
}

/// Apply the goal calorie adjustment to a baseline
///
/// Loss subtracts, gain adds, maintenance leaves the baseline unchanged.
/// The result never goes below zero.
#[must_use]
pub fn goal_adjusted_calories(
    base_calories: f64,
    goal: FitnessGoal,
    config: &MacroSplitConfig,
) -> f64 {
    (base_calories + config.adjustment_for(goal)).max(0.0)
}

/// Protein still to eat today
///
/// Never negative; overshooting the target reports zero remaining.
#[must_use]
pub fn protein_remaining(target_g: f64, consumed_g: f64) -> f64 {
    (target_g - consumed_g).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keto_split_for_2000_kcal() {
        let split = calculate_macro_split(
            2000,
            DietPreference::Keto,
            FitnessGoal::Maintain,
            &MacroSplitConfig::default(),
        )
        .unwrap();

        assert_eq!(split.protein.grams, 125);
        assert_eq!(split.carbs.grams, 25);
        assert_eq!(split.fat.grams, 156);
        assert_eq!(split.protein.calories, 500);
        assert_eq!(split.fat.calories, 1400);
    }

    #[test]
    fn test_goal_picks_ratio_when_not_keto() {
        let config = MacroSplitConfig::default();
        let lose = calculate_macro_split(1800, DietPreference::Standard, FitnessGoal::Lose, &config)
            .unwrap();
        // 40% protein: 1800 * 0.4 / 4 = 180
        assert_eq!(lose.protein.grams, 180);

        let gain = calculate_macro_split(1800, DietPreference::Standard, FitnessGoal::Gain, &config)
            .unwrap();
        // 35% protein: 1800 * 0.35 / 4 = 157.5 -> 158
        assert_eq!(gain.protein.grams, 158);
    }

    #[test]
    fn test_zero_calories_rejected() {
        assert!(calculate_macro_split(
            0,
            DietPreference::Standard,
            FitnessGoal::Maintain,
            &MacroSplitConfig::default()
        )
        .is_err());
    }

    #[test]
    fn test_goal_adjustment() {
        let config = MacroSplitConfig::default();
        assert!(
            (goal_adjusted_calories(2200.0, FitnessGoal::Lose, &config) - 1700.0).abs()
                < f64::EPSILON
        );
        assert!(
            (goal_adjusted_calories(2200.0, FitnessGoal::Gain, &config) - 2500.0).abs()
                < f64::EPSILON
        );
        // Never below zero
        assert!(goal_adjusted_calories(100.0, FitnessGoal::Lose, &config).abs() < f64::EPSILON);
    }

    #[test]
    fn test_protein_remaining_floors_at_zero() {
        assert!((protein_remaining(140.0, 60.0) - 80.0).abs() < f64::EPSILON);
        assert!(protein_remaining(140.0, 180.0).abs() < f64::EPSILON);
    }
}
