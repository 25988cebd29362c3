// ABOUTME: Engagement scheduler with a background ticker and toast lifecycle
// ABOUTME: Random friendly nudges, once-per-day greetings, and capped history
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 GymFit

//! # Nudge Scheduler
//!
//! Owns the "current toast" slot and the recent-notification history. A
//! background ticker periodically rolls a probability gate and, when nothing
//! is already showing, surfaces a random nudge from the motivation, tip,
//! workout, or diet pools. Every toast auto-clears after its display
//! duration unless a newer one replaced it first.
//!
//! The greeting flow is storage-backed so the user is welcomed at most once
//! per calendar day across restarts.

pub mod messages;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{mpsc, Mutex, RwLock};
use tokio::time;
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::errors::AppResult;
use crate::models::{Notification, NotificationKind};
use crate::storage::{StorageKey, StorageProvider};

pub use messages::{NudgeTemplate, TimeOfDay};

/// Device feedback hook fired when a toast is presented
pub trait HapticFeedback: Send + Sync {
    /// Called on every shown notification
    fn notification_shown(&self);
}

/// Haptics sink that does nothing, for headless use and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn notification_shown(&self) {}
}

#[derive(Debug, Default)]
struct SchedulerState {
    current: Option<Notification>,
    history: VecDeque<Notification>,
    // Bumped on every show and dismiss so stale auto-clear timers miss
    clear_generation: u64,
    greeting_shown: bool,
}

/// Shared engagement scheduler
///
/// Uses `Arc<RwLock<SchedulerState>>` for shared state between trigger
/// methods, auto-clear timers, and the background ticker. Cloning produces
/// another handle onto the same state.
#[derive(Clone)]
pub struct NudgeScheduler<S: StorageProvider> {
    storage: S,
    config: SchedulerConfig,
    state: Arc<RwLock<SchedulerState>>,
    rng: Arc<Mutex<StdRng>>,
    haptics: Arc<dyn HapticFeedback>,
    shutdown_tx: Option<Arc<mpsc::Sender<()>>>,
}

impl<S: StorageProvider + 'static> NudgeScheduler<S> {
    /// Create a scheduler with entropy-seeded randomness and no haptics
    ///
    /// When the config enables the ticker this must be called from within a
    /// Tokio runtime, because the ticker task is spawned here.
    #[must_use]
    pub fn new(storage: S, config: SchedulerConfig) -> Self {
        Self::build(storage, config, StdRng::from_entropy(), Arc::new(NoopHaptics))
    }

    /// Create a scheduler that reports shown toasts to a haptics sink
    #[must_use]
    pub fn with_haptics(
        storage: S,
        config: SchedulerConfig,
        haptics: Arc<dyn HapticFeedback>,
    ) -> Self {
        Self::build(storage, config, StdRng::from_entropy(), haptics)
    }

    /// Create a scheduler with explicit randomness, for deterministic tests
    #[must_use]
    pub fn with_rng(storage: S, config: SchedulerConfig, rng: StdRng) -> Self {
        Self::build(storage, config, rng, Arc::new(NoopHaptics))
    }

    fn build(
        storage: S,
        config: SchedulerConfig,
        rng: StdRng,
        haptics: Arc<dyn HapticFeedback>,
    ) -> Self {
        let mut scheduler = Self {
            storage,
            config,
            state: Arc::new(RwLock::new(SchedulerState::default())),
            rng: Arc::new(Mutex::new(rng)),
            haptics,
            shutdown_tx: None,
        };
        if scheduler.config.enable_ticker {
            scheduler.spawn_ticker();
        }
        scheduler
    }

    fn spawn_ticker(&mut self) {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let ticker = self.clone();
        let period = Duration::from_millis(self.config.tick_period_ms);

        tokio::spawn(async move {
            let mut interval = time::interval(period);
            // The first tick completes immediately; the cadence starts after it
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        ticker.tick().await;
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Nudge ticker received shutdown signal");
                        break;
                    }
                }
            }
        });

        self.shutdown_tx = Some(Arc::new(shutdown_tx));
    }

    /// The scheduler settings in effect
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// The toast currently on screen, if any
    pub async fn current(&self) -> Option<Notification> {
        self.state.read().await.current.clone()
    }

    /// Recent notifications, newest first, capped at the configured length
    pub async fn history(&self) -> Vec<Notification> {
        self.state.read().await.history.iter().cloned().collect()
    }

    /// Present a toast, replacing whatever is showing
    ///
    /// The toast becomes current, lands at the front of the history, and is
    /// scheduled to auto-clear after `duration_ms` unless something newer
    /// shows or the user dismisses first.
    pub async fn show(
        &self,
        kind: NotificationKind,
        title: &str,
        message: &str,
        duration_ms: u64,
    ) -> Notification {
        let notification = Notification::new(kind, title, message, duration_ms);

        let generation = {
            let mut state = self.state.write().await;
            state.clear_generation += 1;
            state.current = Some(notification.clone());
            state.history.push_front(notification.clone());
            state.history.truncate(self.config.history_cap);
            state.clear_generation
        };

        self.haptics.notification_shown();

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            time::sleep(Duration::from_millis(duration_ms)).await;
            let mut state = state.write().await;
            if state.clear_generation == generation {
                state.current = None;
            }
        });

        debug!(kind = %kind, title = %notification.title, "notification shown");
        notification
    }

    /// Clear the current toast and cancel its pending auto-clear
    pub async fn dismiss(&self) {
        let mut state = self.state.write().await;
        state.clear_generation += 1;
        state.current = None;
    }

    /// One pass of the engagement gate, as the background ticker runs it
    ///
    /// Rolls the configured probability; on success, and only when nothing
    /// is currently showing, surfaces a random motivation, tip, workout, or
    /// diet nudge.
    pub async fn tick(&self) -> Option<Notification> {
        let roll: f64 = { self.rng.lock().await.gen() };
        if roll >= self.config.tick_probability {
            return None;
        }
        if self.current().await.is_some() {
            return None;
        }

        let choice: u8 = { self.rng.lock().await.gen_range(0..4) };
        let notification = match choice {
            0 => self.show_motivation().await,
            1 => self.show_tip().await,
            2 => self.show_workout_reminder().await,
            _ => self.show_diet_reminder().await,
        };
        Some(notification)
    }

    /// Greet the user once per calendar day
    ///
    /// Compares today's local date against the stored last-greeting date.
    /// When they differ, waits the configured delay, shows a daypart
    /// greeting, and persists today so restarts stay quiet until tomorrow.
    /// Returns `None` when the user was already greeted.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the greeting date cannot be read or
    /// written.
    pub async fn greet(&self) -> AppResult<Option<Notification>> {
        {
            let state = self.state.read().await;
            if state.greeting_shown {
                return Ok(None);
            }
        }

        let today = Local::now().format("%Y-%m-%d").to_string();
        let last: Option<String> = self
            .storage
            .get_json(&StorageKey::LastGreetingDate)
            .await?;
        if last.as_deref() == Some(today.as_str()) {
            return Ok(None);
        }

        time::sleep(Duration::from_millis(self.config.greeting_delay_ms)).await;
        let notification = self.show_greeting().await;

        {
            let mut state = self.state.write().await;
            state.greeting_shown = true;
        }
        self.storage
            .set_json(&StorageKey::LastGreetingDate, &today)
            .await?;
        Ok(Some(notification))
    }

    /// Show a greeting for the current time of day, unconditionally
    pub async fn show_greeting(&self) -> Notification {
        let template = self.pick(messages::greetings(TimeOfDay::now())).await;
        self.show(
            NotificationKind::Greeting,
            template.title,
            template.message,
            self.config.long_toast_duration_ms,
        )
        .await
    }

    /// Show a random encouragement
    pub async fn show_motivation(&self) -> Notification {
        let template = self.pick(&messages::MOTIVATION).await;
        self.show(
            NotificationKind::Motivation,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Show a random workout prompt
    pub async fn show_workout_reminder(&self) -> Notification {
        let template = self.pick(&messages::WORKOUT_REMINDERS).await;
        self.show(
            NotificationKind::Reminder,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Show a random food or hydration prompt
    pub async fn show_diet_reminder(&self) -> Notification {
        let template = self.pick(&messages::DIET_REMINDERS).await;
        self.show(
            NotificationKind::Reminder,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Celebrate a milestone, with the longer display duration
    ///
    /// A custom message replaces the stock praise under a random
    /// celebratory title.
    pub async fn show_achievement(&self, custom_message: Option<&str>) -> Notification {
        let template = self.pick(&messages::ACHIEVEMENTS).await;
        let message = custom_message.unwrap_or(template.message);
        self.show(
            NotificationKind::Achievement,
            template.title,
            message,
            self.config.long_toast_duration_ms,
        )
        .await
    }

    /// Show a random fitness tip
    pub async fn show_tip(&self) -> Notification {
        let template = self.pick(&messages::TIPS).await;
        self.show(
            NotificationKind::Tip,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Show a random relaxation prompt
    pub async fn show_relaxation_reminder(&self) -> Notification {
        let template = self.pick(&messages::RELAXATION).await;
        self.show(
            NotificationKind::Nudge,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Suggest workout music
    pub async fn show_music_suggestion(&self) -> Notification {
        let template = self.pick(&messages::MUSIC).await;
        self.show(
            NotificationKind::Tip,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Encourage an active commute
    pub async fn show_travel_tip(&self) -> Notification {
        let template = self.pick(&messages::TRAVEL).await;
        self.show(
            NotificationKind::Tip,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Prompt the user to book a sports session
    pub async fn show_booking_reminder(&self) -> Notification {
        let template = self.pick(&messages::BOOKING).await;
        self.show(
            NotificationKind::Nudge,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Gently poke a user who has not trained in a while
    pub async fn show_inactivity_nudge(&self) -> Notification {
        let template = self.pick(&messages::INACTIVITY).await;
        self.show(
            NotificationKind::Nudge,
            template.title,
            template.message,
            self.config.toast_duration_ms,
        )
        .await
    }

    /// Show caller-provided text under any kind, with the standard duration
    pub async fn show_custom(
        &self,
        title: &str,
        message: &str,
        kind: NotificationKind,
    ) -> Notification {
        self.show(kind, title, message, self.config.toast_duration_ms)
            .await
    }

    async fn pick(&self, pool: &[NudgeTemplate]) -> NudgeTemplate {
        let mut rng = self.rng.lock().await;
        pool[rng.gen_range(0..pool.len())]
    }
}

impl<S: StorageProvider> Drop for NudgeScheduler<S> {
    fn drop(&mut self) {
        // The ticker exits when it receives the signal or when every sender
        // is gone and recv() returns None
        if let Some(tx) = &self.shutdown_tx {
            if let Err(e) = tx.try_send(()) {
                debug!(error = ?e, "Ticker shutdown signal send failed (channel likely closed)");
            }
        }
    }
}
