// ABOUTME: Main library entry point for the GymFit companion core
// ABOUTME: Session store, nudge scheduler, progress gallery, and health calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

// Crate-level attributes:
// - recursion_limit: Increased from default 128 to 256 for complex derive macros
//   (serde, thiserror) on nested configuration and model types
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # GymFit Core
//!
//! The service core behind the GymFit companion app. It owns everything the
//! app persists and computes locally: the auth session and body-metric
//! profile, the progress-photo gallery, the engagement nudge scheduler, the
//! BMI/BMR/macro calculators, and the travel and nearby-places helpers.
//!
//! ## Features
//!
//! - **Pluggable storage**: one trait over in-memory and JSON-file backends
//! - **Session management**: login, signup, and profile persistence
//! - **Nudge scheduler**: background engagement ticks with a bounded history
//! - **Health calculators**: BMI, BMR, and diet-aware macro splits
//! - **Travel estimates**: per-mode time, fare, and calorie figures
//!
//! ## Architecture
//!
//! The crate follows a modular architecture:
//! - **Storage**: Pluggable key-value persistence for app records
//! - **Session**: Authentication and profile state over storage
//! - **Scheduler**: Notification lifecycle and the engagement ticker
//! - **Intelligence**: Pure calculators over profile values
//! - **Config**: Defaults plus environment overrides for every component
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gymfit_core::config::AppConfig;
//! use gymfit_core::errors::AppResult;
//! use gymfit_core::session::SessionManager;
//! use gymfit_core::storage::MemoryStorage;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = AppConfig::from_env()?;
//!
//!     // Sign a user in against an in-memory store
//!     let sessions = SessionManager::new(MemoryStorage::new());
//!     let user = sessions.login("dev@gymfit.app", "secret123").await?;
//!
//!     println!(
//!         "signed in as {} (nudge period {} ms)",
//!         user.name, config.scheduler.tick_period_ms
//!     );
//!
//!     Ok(())
//! }
//! ```

/// Configuration management with environment overrides
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Progress-photo gallery over pluggable storage
pub mod gallery;

/// Derived-metric calculators for BMI, BMR, and macro splits
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Common data models for users, profiles, photos, and notifications
pub mod models;

/// Nearby-places synthesizer for gyms, trainers, and health venues
pub mod places;

/// Notification scheduler and engagement ticker
pub mod scheduler;

/// Authentication and session management
pub mod session;

/// Local storage abstraction with pluggable backends
pub mod storage;

/// Travel distance, time, fare, and calorie estimates
pub mod travel;
