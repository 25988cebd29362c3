// ABOUTME: Commute planner built on straight-line geography
// ABOUTME: Haversine distances plus per-mode time, cost, and calorie estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

//! # Travel Estimator
//!
//! Distances are great-circle, not street-routed. When the destination could
//! not be geocoded at all, the planner falls back to a whole number of
//! kilometers drawn from the configured range so the user still gets a usable
//! comparison between modes.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::TravelConfig;
use crate::errors::{AppError, AppResult};

/// A WGS 84 latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Degrees north of the equator
    pub latitude: f64,
    /// Degrees east of the prime meridian
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// How the user gets from A to B
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// On foot
    Walk,
    /// Bicycle
    Bike,
    /// Shared auto-rickshaw
    #[serde(rename = "auto")]
    AutoRickshaw,
    /// Taxi
    Cab,
}

impl TransportMode {
    /// Every supported mode, in display order
    pub const ALL: [Self; 4] = [Self::Walk, Self::Bike, Self::AutoRickshaw, Self::Cab];

    /// Stable identifier used in serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Bike => "bike",
            Self::AutoRickshaw => "auto",
            Self::Cab => "cab",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Walk => "Walk",
            Self::Bike => "Bike",
            Self::AutoRickshaw => "Auto",
            Self::Cab => "Cab",
        }
    }

    /// Whether the mode is self-powered and burns calories
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Walk | Self::Bike)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walk" => Ok(Self::Walk),
            "bike" => Ok(Self::Bike),
            "auto" | "auto_rickshaw" => Ok(Self::AutoRickshaw),
            "cab" => Ok(Self::Cab),
            _ => Err(AppError::invalid_input(format!("Unknown transport mode: {s}")).into()),
        }
    }
}

/// A destination resolved to a distance, ready for per-mode estimates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Straight-line distance in km, one decimal when geocoded
    pub distance_km: f64,
    /// What the user typed
    pub destination_name: String,
    /// Reverse-geocoded address, or the typed text when unavailable
    pub destination_address: String,
}

/// Time, fare, and energy cost of covering a route with one mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    /// The mode these numbers describe
    pub mode: TransportMode,
    /// Door-to-door time in whole minutes
    pub duration_min: u32,
    /// Fare in whole currency units
    pub cost: u32,
    /// Energy burned in whole kcal
    pub calories: u32,
}

/// Great-circle distance between two coordinates, in km
#[must_use]
pub fn haversine_km(from: Coordinates, to: Coordinates, config: &TravelConfig) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (lat1.cos() * lat2.cos()).mul_add(
        (delta_lon / 2.0).sin().powi(2),
        (delta_lat / 2.0).sin().powi(2),
    );
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    config.earth_radius_km * c
}

/// Great-circle distance rounded to one decimal, as shown to the user
#[must_use]
pub fn route_distance_km(from: Coordinates, to: Coordinates, config: &TravelConfig) -> f64 {
    (haversine_km(from, to, config) * 10.0).round() / 10.0
}

/// Stand-in distance for a destination that could not be geocoded
///
/// A uniformly random whole number of kilometers from the configured range.
pub fn simulated_distance_km(rng: &mut impl Rng, config: &TravelConfig) -> f64 {
    f64::from(rng.gen_range(config.fallback_min_km..=config.fallback_max_km))
}

/// Resolve a destination into a [`Route`]
///
/// `resolved` carries the geocoder output when it succeeded; `None` switches
/// to the simulated fallback distance. `resolved_address` is the reverse
/// geocode of the destination and `locality` the user's current city, both
/// used only to label the route.
///
/// # Errors
///
/// Returns a validation error when the destination text is empty.
pub fn plan_route(
    rng: &mut impl Rng,
    origin: Coordinates,
    destination: &str,
    resolved: Option<Coordinates>,
    resolved_address: Option<&str>,
    locality: Option<&str>,
    config: &TravelConfig,
) -> AppResult<Route> {
    let destination = destination.trim();
    if destination.is_empty() {
        return Err(AppError::missing_field("Destination"));
    }

    let route = resolved.map_or_else(
        || {
            let destination_address = locality.map_or_else(
                || destination.to_owned(),
                |city| format!("{destination}, {city}"),
            );
            Route {
                distance_km: simulated_distance_km(rng, config),
                destination_name: destination.to_owned(),
                destination_address,
            }
        },
        |coords| Route {
            distance_km: route_distance_km(origin, coords, config),
            destination_name: destination.to_owned(),
            destination_address: resolved_address
                .map_or_else(|| destination.to_owned(), ToOwned::to_owned),
        },
    );
    Ok(route)
}

/// Estimate one mode over a distance
///
/// # Errors
///
/// Returns a validation error for a negative or non-finite distance.
pub fn estimate(
    mode: TransportMode,
    distance_km: f64,
    config: &TravelConfig,
) -> AppResult<RouteEstimate> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance must be a non-negative number of km, got {distance_km}"
        )));
    }
    let params = config.mode(mode);
    let duration_min = (distance_km / params.speed_kmh * 60.0).round() as u32;
    let cost = (distance_km * params.cost_per_km).round() as u32;
    let calories = (params.calories_per_5km * (distance_km / 5.0)).round() as u32;
    Ok(RouteEstimate {
        mode,
        duration_min,
        cost,
        calories,
    })
}

/// Estimate every mode over a distance, in display order
///
/// # Errors
///
/// Returns a validation error for a negative or non-finite distance.
pub fn estimate_all(distance_km: f64, config: &TravelConfig) -> AppResult<Vec<RouteEstimate>> {
    TransportMode::ALL
        .into_iter()
        .map(|mode| estimate(mode, distance_km, config))
        .collect()
}
