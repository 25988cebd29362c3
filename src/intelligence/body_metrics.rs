// ABOUTME: Body composition calculators using published health formulas
// ABOUTME: BMI with category thresholds and revised Harris-Benedict BMR
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 GymFit

//! Body Metrics Module
//!
//! Pure calculators over the body-metric profile. Both are stateless and
//! recomputed on every call; the cost is trivial.
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation
//!   reevaluated. *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//! - WHO (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894 (BMI classification).

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::config::{BmiConfig, BmrConfig};
use crate::errors::AppError;
use crate::models::Gender;

/// BMI classification per the WHO thresholds
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below the underweight threshold
    Underweight,
    /// Healthy range
    Normal,
    /// Above the normal range
    Overweight,
    /// Above the overweight threshold
    Obese,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Associated health risk level
    #[must_use]
    pub const fn health_risk(&self) -> HealthRisk {
        match self {
            Self::Normal => HealthRisk::Low,
            Self::Underweight | Self::Overweight => HealthRisk::Moderate,
            Self::Obese => HealthRisk::High,
        }
    }
}

impl Display for BmiCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Health risk associated with a BMI category
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthRisk {
    /// Within the healthy range
    Low,
    /// Outside the healthy range
    Moderate,
    /// Well outside the healthy range
    High,
}

impl HealthRisk {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl Display for HealthRisk {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a BMI calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// BMI value rounded to one decimal for display
    pub bmi: f64,
    /// Category from the unrounded value
    pub category: BmiCategory,
    /// Health risk for the category
    pub health_risk: HealthRisk,
}

/// Calculate Body Mass Index and classify it
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// The reported value is rounded to one decimal; the category is taken from
/// the unrounded value so a 24.96 still classifies as Normal.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `config` - Category thresholds
///
/// # Errors
///
/// Returns an error if weight or height is not positive
pub fn calculate_bmi(
    weight_kg: f64,
    height_cm: f64,
    config: &BmiConfig,
) -> Result<BmiAssessment, AppError> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be greater than zero"));
    }
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be greater than zero"));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / height_m.powi(2);
    let category = categorize_bmi(bmi, config);

    Ok(BmiAssessment {
        bmi: (bmi * 10.0).round() / 10.0,
        category,
        health_risk: category.health_risk(),
    })
}

/// Classify an already-computed BMI value
#[must_use]
pub fn categorize_bmi(bmi: f64, config: &BmiConfig) -> BmiCategory {
    if bmi < config.underweight_max {
        BmiCategory::Underweight
    } else if bmi < config.normal_max {
        BmiCategory::Normal
    } else if bmi < config.overweight_max {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// Formula: BMR = base + `weight_coef` x `weight_kg` + `height_coef` x
/// `height_cm` + `age_coef` x age, with one coefficient set for men and one
/// for everyone else. The result is rounded to whole kilocalories per day.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Picks the coefficient set
/// * `config` - Formula coefficients
///
/// # Reference
/// Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
///
/// # Errors
///
/// Returns an error if weight, height, or age is not positive
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> Result<f64, AppError> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be greater than zero"));
    }
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be greater than zero"));
    }
    if age == 0 {
        return Err(AppError::invalid_input("Age must be greater than zero"));
    }

    let (base, weight_coef, height_coef, age_coef) = config.coefficients_for(gender);
    let bmr = age_coef.mul_add(
        f64::from(age),
        height_coef.mul_add(height_cm, weight_coef.mul_add(weight_kg, base)),
    );

    Ok(bmr.round())
}
