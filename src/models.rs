// ABOUTME: Core data models and types for the GymFit companion core
// ABOUTME: Defines User, UserProfile, ProgressPhoto, Notification and related enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

//! # Data Models
//!
//! This module contains the core data structures used throughout the crate.
//!
//! ## Design Principles
//!
//! - **Storage Compatible**: Serialized field names match the JSON blobs the
//!   mobile app already persists (camelCase), so existing on-device records
//!   deserialize unchanged
//! - **Extensible**: Optional fields accommodate partially filled profiles
//! - **Type Safe**: Strong typing prevents common data handling errors
//!
//! ## Core Models
//!
//! - `User`: Account identity record, present while a session exists
//! - `UserProfile`: Body-metric profile, merged partially on update
//! - `ProgressPhoto`: A captured photo with comparison metadata
//! - `Notification`: A transient engagement toast

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Account identity record
///
/// Created at signup, overwritten at login, removed at logout. Presence of
/// this record is what "being logged in" means; there is no session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address (used for identification)
    pub email: String,
    /// Display name
    pub name: String,
    /// When the account record was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with a fresh id
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Biological gender used by the metabolic-rate formulas
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male coefficient set
    Male,
    /// Female coefficient set
    Female,
    /// Uses the non-male coefficient set
    Other,
}

impl Gender {
    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Invalid gender: {s}")).into()),
        }
    }
}

/// Self-reported habitual activity level
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_input(format!("Invalid activity level: {s}")).into()),
        }
    }
}

/// Body-metric profile
///
/// Every field is optional; screens fill it in gradually. Updates merge a
/// [`ProfileUpdate`] over the stored record and rewrite the whole blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Biological gender for metabolic formulas
    pub gender: Option<Gender>,
    /// Habitual activity level
    pub activity_level: Option<ActivityLevel>,
    /// Free-form fitness goals
    pub goals: Option<Vec<String>>,
    /// Free-form dietary preferences
    pub dietary_preferences: Option<Vec<String>>,
}

/// Partial profile update
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Biological gender for metabolic formulas
    pub gender: Option<Gender>,
    /// Habitual activity level
    pub activity_level: Option<ActivityLevel>,
    /// Free-form fitness goals
    pub goals: Option<Vec<String>>,
    /// Free-form dietary preferences
    pub dietary_preferences: Option<Vec<String>>,
}

impl UserProfile {
    /// Merge a partial update over this profile, field by field
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(height_cm) = update.height_cm {
            self.height_cm = Some(height_cm);
        }
        if let Some(weight_kg) = update.weight_kg {
            self.weight_kg = Some(weight_kg);
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(gender) = update.gender {
            self.gender = Some(gender);
        }
        if let Some(activity_level) = update.activity_level {
            self.activity_level = Some(activity_level);
        }
        if let Some(goals) = update.goals {
            self.goals = Some(goals);
        }
        if let Some(dietary_preferences) = update.dietary_preferences {
            self.dietary_preferences = Some(dietary_preferences);
        }
    }
}

/// Pose category of a progress photo
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PhotoCategory {
    /// Front relaxed pose
    Front,
    /// Back pose
    Back,
    /// Side profile
    Side,
    /// Flexed pose
    Flexing,
    /// Anything else
    Other,
}

impl PhotoCategory {
    /// All categories, in display order
    pub const ALL: [Self; 5] = [
        Self::Front,
        Self::Back,
        Self::Side,
        Self::Flexing,
        Self::Other,
    ];

    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Side => "side",
            Self::Flexing => "flexing",
            Self::Other => "other",
        }
    }
}

impl Display for PhotoCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhotoCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            "side" => Ok(Self::Side),
            "flexing" => Ok(Self::Flexing),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Invalid photo category: {s}")).into()),
        }
    }
}

/// A captured progress photo with comparison metadata
///
/// `id` is the capture timestamp in milliseconds rendered as a string, which
/// doubles as the uniqueness key. `weight` is free text exactly as typed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPhoto {
    /// Millisecond-timestamp identifier
    pub id: String,
    /// Local file reference for the image
    pub uri: String,
    /// When the photo was taken
    pub date: DateTime<Utc>,
    /// Free-form note
    pub note: String,
    /// Pose category
    pub category: PhotoCategory,
    /// Body weight at capture time, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Whether the photo is starred
    pub is_favorite: bool,
}

/// Kind of engagement notification
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Motivational push
    Motivation,
    /// Workout or diet reminder
    Reminder,
    /// Milestone reached
    Achievement,
    /// Health or training tip
    Tip,
    /// Time-of-day greeting
    Greeting,
    /// Gentle engagement nudge
    Nudge,
    /// Celebratory toast
    Celebration,
}

impl NotificationKind {
    /// Convert to string for display and logging
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::Reminder => "reminder",
            Self::Achievement => "achievement",
            Self::Tip => "tip",
            Self::Greeting => "greeting",
            Self::Nudge => "nudge",
            Self::Celebration => "celebration",
        }
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A transient engagement toast
///
/// Exists only in memory; the scheduler replaces or clears it after its
/// display duration elapses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Millisecond-timestamp identifier
    pub id: String,
    /// Notification kind
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
    /// When the notification was created
    pub timestamp: DateTime<Utc>,
    /// How long it stays on screen
    #[serde(rename = "duration")]
    pub duration_ms: u64,
}

impl Notification {
    /// Create a notification stamped with the current time
    #[must_use]
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: now,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_apply_merges_only_present_fields() {
        let mut profile = UserProfile {
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            ..UserProfile::default()
        };

        profile.apply(ProfileUpdate {
            weight_kg: Some(68.5),
            age: Some(31),
            ..ProfileUpdate::default()
        });

        assert_eq!(profile.height_cm, Some(175.0));
        assert_eq!(profile.weight_kg, Some(68.5));
        assert_eq!(profile.age, Some(31));
        assert_eq!(profile.gender, None);
    }

    #[test]
    fn test_photo_serializes_with_stored_field_names() {
        let photo = ProgressPhoto {
            id: "1723451998000".to_owned(),
            uri: "file:///photos/1723451998000.jpg".to_owned(),
            date: Utc::now(),
            note: "Week 4".to_owned(),
            category: PhotoCategory::Front,
            weight: Some("72.5".to_owned()),
            is_favorite: true,
        };

        let json = serde_json::to_string(&photo).unwrap();
        assert!(json.contains("\"isFavorite\":true"));
        assert!(json.contains("\"category\":\"front\""));
    }

    #[test]
    fn test_notification_kind_round_trip() {
        for kind in [
            NotificationKind::Motivation,
            NotificationKind::Reminder,
            NotificationKind::Achievement,
            NotificationKind::Tip,
            NotificationKind::Greeting,
            NotificationKind::Nudge,
            NotificationKind::Celebration,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: NotificationKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_photo_category_from_str_rejects_unknown() {
        assert!(PhotoCategory::from_str("front").is_ok());
        assert!(PhotoCategory::from_str("selfie").is_err());
    }

    #[test]
    fn test_notification_serializes_kind_under_type_key() {
        let toast = Notification::new(NotificationKind::Greeting, "Good Morning! 🌞", "Hi", 5000);
        let json = serde_json::to_string(&toast).unwrap();
        assert!(json.contains("\"type\":\"greeting\""));
        assert!(json.contains("\"duration\":5000"));
    }
}
