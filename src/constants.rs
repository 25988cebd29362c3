// ABOUTME: Application constants organized by domain
// ABOUTME: Storage keys, scheduler timing, and nutrition energy densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

//! # Constants Module
//!
//! Application constants grouped into logical domains rather than a single
//! flat list. Tunable values carry their defaults here; the `config` module
//! layers environment overrides on top.

/// Local storage keys for persisted records
pub mod storage_keys {
    /// Auth session record (single `User` JSON blob)
    pub const AUTH_RECORD: &str = "gymfit_auth";
    /// Body-metric profile record (single `UserProfile` JSON blob)
    pub const PROFILE_RECORD: &str = "gymfit_profile";
    /// Progress photo collection (JSON array, rewritten wholesale)
    pub const PROGRESS_PHOTOS: &str = "@gymfit_progress_photos";
    /// Calendar date of the last greeting shown (`YYYY-MM-DD`)
    pub const LAST_GREETING_DATE: &str = "lastGreetingDate";
}

/// Notification scheduler timing defaults
pub mod scheduler {
    /// Period of the engagement tick
    pub const TICK_PERIOD_MS: u64 = 120_000; // 2 minutes
    /// Probability that a tick emits a nudge when nothing is showing
    pub const TICK_PROBABILITY: f64 = 0.4;
    /// Display duration for ordinary toasts
    pub const TOAST_DURATION_MS: u64 = 4_000;
    /// Display duration for greetings and achievements
    pub const LONG_TOAST_DURATION_MS: u64 = 5_000;
    /// Delay before the once-per-day greeting on startup
    pub const GREETING_DELAY_MS: u64 = 2_000;
    /// Maximum retained notification history entries
    pub const HISTORY_CAP: usize = 50;
    /// Hours before this are "morning"
    pub const MORNING_END_HOUR: u32 = 12;
    /// Hours before this (and past morning) are "afternoon"
    pub const AFTERNOON_END_HOUR: u32 = 17;
}

/// Macro-nutrient energy density
pub mod nutrition {
    /// Energy per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Energy per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Energy per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Time conversion constants
pub mod time {
    /// Milliseconds in one day
    pub const MILLIS_PER_DAY: i64 = 86_400_000;
    /// Days per week for relative-age formatting
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Days per month for relative-age formatting
    pub const DAYS_PER_MONTH: i64 = 30;
}

/// Service identity for structured logging
pub mod service_names {
    /// Canonical service name
    pub const GYMFIT_CORE: &str = "gymfit-core";
}

/// Environment-based configuration
pub mod env_config {
    use std::env;
    use std::path::PathBuf;

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned())
    }

    /// Get the data directory for file-backed storage from environment,
    /// falling back to the platform data dir
    #[must_use]
    pub fn data_dir() -> PathBuf {
        env::var("GYMFIT_DATA_DIR").map_or_else(
            |_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("gymfit")
            },
            PathBuf::from,
        )
    }
}
