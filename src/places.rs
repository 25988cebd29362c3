// ABOUTME: Synthesizer of plausible protein-source venues around a coordinate
// ABOUTME: Seeded generation of names, distances, ratings, and specialties
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 GymFit

//! # Nearby Places
//!
//! There is no venue database behind this module. It fabricates a small,
//! locally plausible set of protein-friendly spots near the user so the food
//! finder always has something to show. Generation is deterministic under a
//! seeded RNG, which is also how the tests pin it down.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::PlacesConfig;
use crate::errors::AppError;
use crate::travel::Coordinates;

const RESTAURANT_NAMES: [&str; 8] = [
    "Protein House Grill",
    "Muscle Kitchen",
    "Fit Bites Cafe",
    "The Healthy Bowl",
    "Grilled & Good",
    "Power Plate Restaurant",
    "Lean Cuisine Hub",
    "Gym Eats Kitchen",
];

const SUPERMARKET_NAMES: [&str; 8] = [
    "FreshMart Supermarket",
    "Organic Valley Store",
    "Metro Fresh Market",
    "BigBasket Store",
    "Reliance Fresh",
    "More Supermarket",
    "Spencer's Daily",
    "D-Mart Express",
];

const GROCERY_NAMES: [&str; 8] = [
    "Green Grocer",
    "Daily Needs Store",
    "Farm Fresh Groceries",
    "Local Kirana Store",
    "Wellness Grocery",
    "Nature's Basket",
    "Healthy Harvest",
    "Quick Mart",
];

const CAFE_NAMES: [&str; 8] = [
    "Protein Shake Bar",
    "Fit Fuel Cafe",
    "Smoothie Station",
    "Health Hub Cafe",
    "Energy Boost Cafe",
    "Lean Bean Coffee",
    "Nutri Cafe",
    "Wellness Lounge",
];

const RESTAURANT_SPECIALTIES: [&[&str]; 3] = [
    &["Grilled Chicken", "Protein Bowls", "Egg White Omelettes"],
    &["Fish Fillet", "Turkey Wraps", "Quinoa Salads"],
    &["Tofu Stir-fry", "Lentil Soup", "Paneer Dishes"],
];

const SUPERMARKET_SPECIALTIES: [&[&str]; 3] = [
    &["Fresh Meat Section", "Dairy Products", "Protein Bars"],
    &["Organic Eggs", "Greek Yogurt", "Whey Protein"],
    &["Seafood Counter", "Tofu & Tempeh", "Nuts & Seeds"],
];

const GROCERY_SPECIALTIES: [&[&str]; 3] = [
    &["Eggs", "Milk", "Cheese", "Paneer"],
    &["Lentils", "Chickpeas", "Beans"],
    &["Nuts", "Seeds", "Protein Snacks"],
];

const CAFE_SPECIALTIES: [&[&str]; 3] = [
    &["Protein Shakes", "Egg Sandwiches", "Greek Yogurt Parfait"],
    &["Smoothie Bowls", "Chicken Wraps", "Protein Coffee"],
    &["Energy Bars", "Nut Butter Toast", "Cottage Cheese Bowl"],
];

const STREET_NAMES: [&str; 6] = [
    "Main Street",
    "Market Road",
    "Station Road",
    "Park Avenue",
    "Gandhi Nagar",
    "MG Road",
];

/// Kind of venue the synthesizer can produce
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    /// Sit-down protein-focused restaurants
    Restaurant,
    /// Large-format supermarkets
    Supermarket,
    /// Neighborhood grocery and kirana stores
    Grocery,
    /// Shake bars and health cafes
    Cafe,
}

impl PlaceKind {
    /// Every kind, in generation order
    pub const ALL: [Self; 4] = [
        Self::Restaurant,
        Self::Supermarket,
        Self::Grocery,
        Self::Cafe,
    ];

    /// Stable identifier used in serialized form and venue ids
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Supermarket => "supermarket",
            Self::Grocery => "grocery",
            Self::Cafe => "cafe",
        }
    }

    const fn name_pool(self) -> &'static [&'static str] {
        match self {
            Self::Restaurant => &RESTAURANT_NAMES,
            Self::Supermarket => &SUPERMARKET_NAMES,
            Self::Grocery => &GROCERY_NAMES,
            Self::Cafe => &CAFE_NAMES,
        }
    }

    const fn specialty_sets(self) -> &'static [&'static [&'static str]] {
        match self {
            Self::Restaurant => &RESTAURANT_SPECIALTIES,
            Self::Supermarket => &SUPERMARKET_SPECIALTIES,
            Self::Grocery => &GROCERY_SPECIALTIES,
            Self::Cafe => &CAFE_SPECIALTIES,
        }
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlaceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" => Ok(Self::Restaurant),
            "supermarket" => Ok(Self::Supermarket),
            "grocery" => Ok(Self::Grocery),
            "cafe" => Ok(Self::Cafe),
            _ => Err(AppError::invalid_input(format!("Unknown place kind: {s}")).into()),
        }
    }
}

/// One synthesized venue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlace {
    /// Kind plus per-kind index, e.g. `restaurant-0`
    pub id: String,
    /// Venue name drawn from the kind's pool
    pub name: String,
    /// What kind of venue this is
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    /// Distance from the query point in km, one decimal
    pub distance: f64,
    /// Rating on a 5-point scale
    pub rating: f64,
    /// Street number and name
    pub address: String,
    /// Indian mobile number
    pub phone: String,
    /// Whether the venue is open right now
    pub is_open: bool,
    /// Protein options the venue is known for
    pub specialties: Vec<String>,
    /// Degrees north, jittered around the query point
    pub latitude: f64,
    /// Degrees east, jittered around the query point
    pub longitude: f64,
}

/// Synthesize venues of every kind around a coordinate, nearest first
pub fn nearby_places(
    rng: &mut impl Rng,
    center: Coordinates,
    config: &PlacesConfig,
) -> Vec<NearbyPlace> {
    let mut places = Vec::new();
    for kind in PlaceKind::ALL {
        let count = rng.gen_range(config.min_per_kind..=config.max_per_kind);
        for index in 0..count {
            places.push(synthesize_place(rng, kind, index, center, config));
        }
    }
    places.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    places
}

/// Keep only venues of one kind; `None` keeps everything
#[must_use]
pub fn filter_by_kind(places: &[NearbyPlace], kind: Option<PlaceKind>) -> Vec<NearbyPlace> {
    places
        .iter()
        .filter(|place| kind.is_none_or(|k| place.kind == k))
        .cloned()
        .collect()
}

fn synthesize_place(
    rng: &mut impl Rng,
    kind: PlaceKind,
    index: usize,
    center: Coordinates,
    config: &PlacesConfig,
) -> NearbyPlace {
    let names = kind.name_pool();
    let specialty_sets = kind.specialty_sets();
    let distance = rng.gen_range(config.min_distance_km..config.max_distance_km);
    let street = STREET_NAMES[rng.gen_range(0..STREET_NAMES.len())];
    let specialties = specialty_sets[rng.gen_range(0..specialty_sets.len())];

    NearbyPlace {
        id: format!("{kind}-{index}"),
        name: names[rng.gen_range(0..names.len())].to_owned(),
        kind,
        distance: (distance * 10.0).round() / 10.0,
        rating: rng.gen_range(config.min_rating..config.max_rating),
        address: format!("{} {street}", rng.gen_range(100..1000)),
        phone: format!("+91 {}", rng.gen_range(7_000_000_000_u64..10_000_000_000)),
        is_open: rng.gen_bool(config.open_probability),
        specialties: specialties.iter().map(|&s| s.to_owned()).collect(),
        latitude: (rng.gen::<f64>() - 0.5).mul_add(config.jitter_degrees, center.latitude),
        longitude: (rng.gen::<f64>() - 0.5).mul_add(config.jitter_degrees, center.longitude),
    }
}
