// ABOUTME: Configuration management module for centralized settings and tunables
// ABOUTME: Scheduler timing, calculator coefficients, travel modes, and synthetic-data ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit
//! Configuration module for the GymFit core
//!
//! This module provides centralized configuration for all components:
//!
//! - **Scheduler**: Engagement-tick period, probability, and display durations
//! - **Body metrics**: BMI thresholds and BMR formula coefficients
//! - **Macro split**: Diet-preference ratio tables and goal calorie adjustments
//! - **Travel**: Transport-mode table and fallback distance range
//! - **Places**: Value ranges for the nearby-places synthesizer
//!
//! Defaults are compiled in; the scheduler tunables can be overridden through
//! `GYMFIT_*` environment variables. Coefficients of the published formulas
//! are configuration so tests and callers can pin them, but carry no
//! environment overrides.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::scheduler as scheduler_defaults;
use crate::errors::{AppError, AppResult};
use crate::intelligence::macros::{DietPreference, FitnessGoal};
use crate::models::Gender;
use crate::travel::TransportMode;

/// Top-level configuration for every component in the crate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Notification scheduler tunables
    pub scheduler: SchedulerConfig,
    /// BMI and BMR calculator settings
    pub body_metrics: BodyMetricsConfig,
    /// Macro-split ratio tables
    pub macro_split: MacroSplitConfig,
    /// Travel estimator settings
    pub travel: TravelConfig,
    /// Nearby-places synthesizer ranges
    pub places: PlacesConfig,
}

impl AppConfig {
    /// Build a configuration from the environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the resulting values fail
    /// validation (for example a probability outside `[0, 1]`).
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            scheduler: SchedulerConfig::from_env(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered.
    pub fn validate(&self) -> AppResult<()> {
        self.scheduler.validate()?;
        self.body_metrics.validate()?;
        self.macro_split.validate()?;
        self.travel.validate()?;
        self.places.validate()?;
        Ok(())
    }
}

/// Notification scheduler tunables
///
/// The period and probability are product-tuning values, not behavior;
/// deployments adjust them freely through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Period of the engagement tick in milliseconds
    pub tick_period_ms: u64,
    /// Probability that a tick emits a nudge when nothing is showing (0.0-1.0)
    pub tick_probability: f64,
    /// Display duration for ordinary toasts in milliseconds
    pub toast_duration_ms: u64,
    /// Display duration for greetings and achievements in milliseconds
    pub long_toast_duration_ms: u64,
    /// Delay before the once-per-day greeting on startup in milliseconds
    pub greeting_delay_ms: u64,
    /// Maximum retained history entries
    pub history_cap: usize,
    /// Whether the background engagement ticker is spawned at all
    pub enable_ticker: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: scheduler_defaults::TICK_PERIOD_MS,
            tick_probability: scheduler_defaults::TICK_PROBABILITY,
            toast_duration_ms: scheduler_defaults::TOAST_DURATION_MS,
            long_toast_duration_ms: scheduler_defaults::LONG_TOAST_DURATION_MS,
            greeting_delay_ms: scheduler_defaults::GREETING_DELAY_MS,
            history_cap: scheduler_defaults::HISTORY_CAP,
            enable_ticker: true,
        }
    }
}

impl SchedulerConfig {
    /// Read overrides from `GYMFIT_*` environment variables
    ///
    /// Unset or unparseable variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tick_period_ms: env_parse("GYMFIT_NUDGE_PERIOD_MS")
                .unwrap_or(defaults.tick_period_ms),
            tick_probability: env_parse("GYMFIT_NUDGE_PROBABILITY")
                .unwrap_or(defaults.tick_probability),
            toast_duration_ms: env_parse("GYMFIT_TOAST_MS").unwrap_or(defaults.toast_duration_ms),
            long_toast_duration_ms: env_parse("GYMFIT_LONG_TOAST_MS")
                .unwrap_or(defaults.long_toast_duration_ms),
            greeting_delay_ms: env_parse("GYMFIT_GREETING_DELAY_MS")
                .unwrap_or(defaults.greeting_delay_ms),
            history_cap: env_parse("GYMFIT_HISTORY_CAP").unwrap_or(defaults.history_cap),
            enable_ticker: env_parse("GYMFIT_NUDGE_TICKER").unwrap_or(defaults.enable_ticker),
        }
    }

    /// Validate ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the probability is outside `[0, 1]`,
    /// the tick period is zero, or the history cap is zero.
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.tick_probability) {
            return Err(AppError::config_invalid(format!(
                "tick probability must be between 0.0 and 1.0, got {}",
                self.tick_probability
            )));
        }
        if self.tick_period_ms == 0 {
            return Err(AppError::config_invalid(
                "tick period must be greater than zero",
            ));
        }
        if self.history_cap == 0 {
            return Err(AppError::config_invalid(
                "history cap must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// BMI and BMR calculator settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyMetricsConfig {
    /// BMI category thresholds
    pub bmi: BmiConfig,
    /// BMR formula coefficients
    pub bmr: BmrConfig,
}

impl BodyMetricsConfig {
    /// Validate both sections
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered.
    pub fn validate(&self) -> AppResult<()> {
        self.bmi.validate()?;
        Ok(())
    }
}

/// BMI category thresholds (kg/m²)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiConfig {
    /// Below this is underweight: 18.5
    pub underweight_max: f64,
    /// Below this (and past underweight) is normal: 25.0
    pub normal_max: f64,
    /// Below this (and past normal) is overweight: 30.0
    pub overweight_max: f64,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            underweight_max: 18.5,
            normal_max: 25.0,
            overweight_max: 30.0,
        }
    }
}

impl BmiConfig {
    /// Validate that thresholds ascend
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when thresholds are not strictly increasing.
    pub fn validate(&self) -> AppResult<()> {
        if self.underweight_max < self.normal_max && self.normal_max < self.overweight_max {
            Ok(())
        } else {
            Err(AppError::config_invalid(
                "BMI thresholds must be strictly increasing",
            ))
        }
    }
}

/// BMR coefficients, revised Harris-Benedict (Roza & Shizgal, 1984)
///
/// `bmr = base + weight_coef * kg + height_coef * cm + age_coef * years`
/// with the age coefficient stored negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male base constant (88.362)
    pub male_base: f64,
    /// Male weight coefficient (13.397)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799)
    pub male_height_coef: f64,
    /// Male age coefficient (-5.677)
    pub male_age_coef: f64,
    /// Non-male base constant (447.593)
    pub female_base: f64,
    /// Non-male weight coefficient (9.247)
    pub female_weight_coef: f64,
    /// Non-male height coefficient (3.098)
    pub female_height_coef: f64,
    /// Non-male age coefficient (-4.330)
    pub female_age_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_base: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: -5.677,
            female_base: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: -4.330,
        }
    }
}

impl BmrConfig {
    /// Coefficient set for a gender as (base, weight, height, age)
    ///
    /// Anything other than `Male` uses the non-male set, matching the
    /// two-branch formula.
    #[must_use]
    pub const fn coefficients_for(&self, gender: Gender) -> (f64, f64, f64, f64) {
        match gender {
            Gender::Male => (
                self.male_base,
                self.male_weight_coef,
                self.male_height_coef,
                self.male_age_coef,
            ),
            Gender::Female | Gender::Other => (
                self.female_base,
                self.female_weight_coef,
                self.female_height_coef,
                self.female_age_coef,
            ),
        }
    }
}

/// Macro ratio for one (preference, goal) bucket, as fractions of calories
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Fraction of calories from protein
    pub protein: f64,
    /// Fraction of calories from carbohydrate
    pub carbs: f64,
    /// Fraction of calories from fat
    pub fat: f64,
}

impl MacroRatio {
    fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Macro-split ratio tables and goal calorie adjustments
///
/// The keto ratio applies regardless of goal; otherwise the goal picks the
/// ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Ketogenic ratio, takes precedence over the goal: 25/5/70
    pub keto: MacroRatio,
    /// Muscle-gain ratio: 35/45/20
    pub gain: MacroRatio,
    /// Weight-loss ratio: 40/30/30
    pub lose: MacroRatio,
    /// Maintenance ratio: 30/40/30
    pub maintain: MacroRatio,
    /// Calorie adjustment for a weight-loss goal (kcal/day)
    pub lose_calorie_adjustment: f64,
    /// Calorie adjustment for maintenance (kcal/day)
    pub maintain_calorie_adjustment: f64,
    /// Calorie adjustment for a muscle-gain goal (kcal/day)
    pub gain_calorie_adjustment: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            keto: MacroRatio {
                protein: 0.25,
                carbs: 0.05,
                fat: 0.70,
            },
            gain: MacroRatio {
                protein: 0.35,
                carbs: 0.45,
                fat: 0.20,
            },
            lose: MacroRatio {
                protein: 0.40,
                carbs: 0.30,
                fat: 0.30,
            },
            maintain: MacroRatio {
                protein: 0.30,
                carbs: 0.40,
                fat: 0.30,
            },
            lose_calorie_adjustment: -500.0,
            maintain_calorie_adjustment: 0.0,
            gain_calorie_adjustment: 300.0,
        }
    }
}

impl MacroSplitConfig {
    /// Ratio for a (preference, goal) pair
    #[must_use]
    pub const fn ratio_for(&self, preference: DietPreference, goal: FitnessGoal) -> MacroRatio {
        if matches!(preference, DietPreference::Keto) {
            return self.keto;
        }
        match goal {
            FitnessGoal::Gain => self.gain,
            FitnessGoal::Lose => self.lose,
            FitnessGoal::Maintain => self.maintain,
        }
    }

    /// Daily calorie adjustment for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::Lose => self.lose_calorie_adjustment,
            FitnessGoal::Maintain => self.maintain_calorie_adjustment,
            FitnessGoal::Gain => self.gain_calorie_adjustment,
        }
    }

    /// Validate that every ratio sums to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the first ratio whose fractions do not
    /// sum to 1.0.
    pub fn validate(&self) -> AppResult<()> {
        let tables = [
            ("keto", self.keto),
            ("gain", self.gain),
            ("lose", self.lose),
            ("maintain", self.maintain),
        ];
        for (name, ratio) in tables {
            if (ratio.sum() - 1.0).abs() > 1e-9 {
                return Err(AppError::config_invalid(format!(
                    "{name} macro fractions must sum to 1.0, got {}",
                    ratio.sum()
                )));
            }
        }
        Ok(())
    }
}

/// One transport mode's estimate parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransportModeConfig {
    /// Average speed in km/h
    pub speed_kmh: f64,
    /// Fare per kilometer
    pub cost_per_km: f64,
    /// Calories burned per 5 km traveled
    pub calories_per_5km: f64,
}

/// Travel estimator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Mean Earth radius for the great-circle distance, km
    pub earth_radius_km: f64,
    /// Lower bound of the fallback distance when geocoding fails, km
    pub fallback_min_km: u32,
    /// Upper bound (inclusive) of the fallback distance, km
    pub fallback_max_km: u32,
    /// Walking estimates
    pub walk: TransportModeConfig,
    /// Cycling estimates
    pub bike: TransportModeConfig,
    /// Auto-rickshaw estimates
    pub auto_rickshaw: TransportModeConfig,
    /// Cab estimates
    pub cab: TransportModeConfig,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: 6371.0,
            fallback_min_km: 1,
            fallback_max_km: 15,
            walk: TransportModeConfig {
                speed_kmh: 5.0,
                cost_per_km: 0.0,
                calories_per_5km: 60.0,
            },
            bike: TransportModeConfig {
                speed_kmh: 15.0,
                cost_per_km: 0.0,
                calories_per_5km: 30.0,
            },
            auto_rickshaw: TransportModeConfig {
                speed_kmh: 25.0,
                cost_per_km: 8.0,
                calories_per_5km: 0.0,
            },
            cab: TransportModeConfig {
                speed_kmh: 35.0,
                cost_per_km: 15.0,
                calories_per_5km: 0.0,
            },
        }
    }
}

impl TravelConfig {
    /// Parameters for a transport mode
    #[must_use]
    pub const fn mode(&self, mode: TransportMode) -> TransportModeConfig {
        match mode {
            TransportMode::Walk => self.walk,
            TransportMode::Bike => self.bike,
            TransportMode::AutoRickshaw => self.auto_rickshaw,
            TransportMode::Cab => self.cab,
        }
    }

    /// Validate speeds and the fallback range
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a mode speed is not positive or the
    /// fallback range is empty.
    pub fn validate(&self) -> AppResult<()> {
        let modes = [
            ("walk", self.walk),
            ("bike", self.bike),
            ("auto_rickshaw", self.auto_rickshaw),
            ("cab", self.cab),
        ];
        for (name, mode) in modes {
            if mode.speed_kmh <= 0.0 {
                return Err(AppError::config_invalid(format!(
                    "{name} speed must be positive, got {}",
                    mode.speed_kmh
                )));
            }
        }
        if self.fallback_min_km > self.fallback_max_km {
            return Err(AppError::config_invalid(
                "fallback distance range is empty",
            ));
        }
        Ok(())
    }
}

/// Value ranges for the nearby-places synthesizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Minimum venues generated per kind
    pub min_per_kind: usize,
    /// Maximum venues generated per kind (inclusive)
    pub max_per_kind: usize,
    /// Closest generated distance, km
    pub min_distance_km: f64,
    /// Farthest generated distance, km
    pub max_distance_km: f64,
    /// Lowest generated rating
    pub min_rating: f64,
    /// Highest generated rating
    pub max_rating: f64,
    /// Probability a venue is open right now
    pub open_probability: f64,
    /// Full width of the coordinate jitter in degrees
    pub jitter_degrees: f64,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            min_per_kind: 2,
            max_per_kind: 3,
            min_distance_km: 0.3,
            max_distance_km: 4.8,
            min_rating: 3.5,
            max_rating: 5.0,
            open_probability: 0.8,
            jitter_degrees: 0.05,
        }
    }
}

impl PlacesConfig {
    /// Validate ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a range is empty or the open probability
    /// is outside `[0, 1]`.
    pub fn validate(&self) -> AppResult<()> {
        if self.min_per_kind > self.max_per_kind {
            return Err(AppError::config_invalid(
                "per-kind venue range is empty",
            ));
        }
        if self.min_distance_km > self.max_distance_km {
            return Err(AppError::config_invalid(
                "distance range is empty",
            ));
        }
        if self.min_rating > self.max_rating {
            return Err(AppError::config_invalid(
                "rating range is empty",
            ));
        }
        if !(0.0..=1.0).contains(&self.open_probability) {
            return Err(AppError::config_invalid(format!(
                "open probability must be between 0.0 and 1.0, got {}",
                self.open_probability
            )));
        }
        Ok(())
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| raw.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let config = SchedulerConfig {
            tick_probability: 1.2,
            ..SchedulerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_keto_ratio_wins_over_goal() {
        let config = MacroSplitConfig::default();
        let ratio = config.ratio_for(DietPreference::Keto, FitnessGoal::Gain);
        assert!((ratio.fat - 0.70).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_adjustments() {
        let config = MacroSplitConfig::default();
        assert!((config.adjustment_for(FitnessGoal::Lose) - -500.0).abs() < f64::EPSILON);
        assert!((config.adjustment_for(FitnessGoal::Gain) - 300.0).abs() < f64::EPSILON);
        assert!(config.adjustment_for(FitnessGoal::Maintain).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_coefficients_branch_on_gender() {
        let config = BmrConfig::default();
        let (male_base, ..) = config.coefficients_for(Gender::Male);
        let (other_base, ..) = config.coefficients_for(Gender::Other);
        assert!((male_base - 88.362).abs() < f64::EPSILON);
        assert!((other_base - 447.593).abs() < f64::EPSILON);
    }
}
