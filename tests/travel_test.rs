// ABOUTME: Integration tests for the travel estimator
// ABOUTME: Per-mode estimates, route planning with and without geocoding, and serialized shapes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 GymFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use gymfit_core::config::TravelConfig;
use gymfit_core::errors::ErrorCode;
use gymfit_core::travel::{
    estimate, estimate_all, plan_route, route_distance_km, Coordinates, TransportMode,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

const BENGALURU: Coordinates = Coordinates::new(12.9716, 77.5946);

#[test]
fn test_walk_estimate_over_five_km() -> Result<()> {
    let config = TravelConfig::default();

    let walk = estimate(TransportMode::Walk, 5.0, &config)?;
    assert_eq!(walk.duration_min, 60);
    assert_eq!(walk.cost, 0);
    assert_eq!(walk.calories, 60);

    Ok(())
}

#[test]
fn test_motorized_estimates_cost_but_burn_nothing() -> Result<()> {
    let config = TravelConfig::default();

    let auto = estimate(TransportMode::AutoRickshaw, 5.0, &config)?;
    assert_eq!(auto.duration_min, 12);
    assert_eq!(auto.cost, 40);
    assert_eq!(auto.calories, 0);

    let cab = estimate(TransportMode::Cab, 12.3, &config)?;
    assert_eq!(cab.duration_min, 21);
    assert_eq!(cab.cost, 185);
    assert_eq!(cab.calories, 0);

    Ok(())
}

#[test]
fn test_zero_distance_estimates_are_all_zero() -> Result<()> {
    let config = TravelConfig::default();

    for mode in TransportMode::ALL {
        let zero = estimate(mode, 0.0, &config)?;
        assert_eq!(zero.duration_min, 0);
        assert_eq!(zero.cost, 0);
        assert_eq!(zero.calories, 0);
    }

    Ok(())
}

#[test]
fn test_estimate_rejects_bad_distances() {
    let config = TravelConfig::default();

    let err = estimate(TransportMode::Walk, -1.0, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = estimate(TransportMode::Walk, f64::NAN, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_estimate_all_follows_display_order() -> Result<()> {
    let config = TravelConfig::default();

    let estimates = estimate_all(3.2, &config)?;
    let modes: Vec<TransportMode> = estimates.iter().map(|e| e.mode).collect();
    assert_eq!(modes, TransportMode::ALL.to_vec());

    // Active modes burn calories, motorized ones cost money
    assert!(estimates[0].calories > 0);
    assert!(estimates[1].calories > 0);
    assert!(estimates[2].cost > 0);
    assert!(estimates[3].cost > 0);

    Ok(())
}

#[test]
fn test_plan_route_with_geocoded_destination() -> Result<()> {
    let config = TravelConfig::default();
    let mut rng = StdRng::seed_from_u64(11);

    // One degree of latitude north of the origin
    let resolved = Coordinates::new(13.9716, 77.5946);
    let route = plan_route(
        &mut rng,
        BENGALURU,
        "  Gold's Gym  ",
        Some(resolved),
        Some("MG Road, Bengaluru"),
        Some("Bengaluru"),
        &config,
    )?;

    assert_eq!(route.destination_name, "Gold's Gym");
    assert_eq!(route.destination_address, "MG Road, Bengaluru");
    assert!((route.distance_km - 111.2).abs() < 1e-9);
    assert!(
        (route.distance_km - route_distance_km(BENGALURU, resolved, &config)).abs() < f64::EPSILON
    );

    Ok(())
}

#[test]
fn test_plan_route_falls_back_to_simulated_distance() -> Result<()> {
    let config = TravelConfig::default();
    let mut rng = StdRng::seed_from_u64(11);

    let route = plan_route(
        &mut rng,
        BENGALURU,
        "Iron Paradise",
        None,
        None,
        Some("Bengaluru"),
        &config,
    )?;

    assert_eq!(route.destination_name, "Iron Paradise");
    assert_eq!(route.destination_address, "Iron Paradise, Bengaluru");
    // The fallback is a whole number of kilometers from the configured range
    assert!((1.0..=15.0).contains(&route.distance_km));
    assert!(route.distance_km.fract().abs() < f64::EPSILON);

    // Without a known locality the address is just the typed text
    let bare = plan_route(&mut rng, BENGALURU, "Iron Paradise", None, None, None, &config)?;
    assert_eq!(bare.destination_address, "Iron Paradise");

    Ok(())
}

#[test]
fn test_plan_route_rejects_blank_destination() {
    let config = TravelConfig::default();
    let mut rng = StdRng::seed_from_u64(11);

    let err = plan_route(&mut rng, BENGALURU, "   ", None, None, None, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_transport_mode_serialized_names() -> Result<()> {
    assert_eq!(serde_json::to_value(TransportMode::AutoRickshaw)?, json!("auto"));
    assert_eq!(serde_json::to_value(TransportMode::Walk)?, json!("walk"));

    assert_eq!("auto".parse::<TransportMode>()?, TransportMode::AutoRickshaw);
    assert_eq!("CAB".parse::<TransportMode>()?, TransportMode::Cab);
    assert!("rocket".parse::<TransportMode>().is_err());

    Ok(())
}

#[test]
fn test_estimate_serialized_shape() -> Result<()> {
    let config = TravelConfig::default();
    let value = serde_json::to_value(estimate(TransportMode::Bike, 5.0, &config)?)?;

    assert_eq!(value["mode"], json!("bike"));
    assert_eq!(value["durationMin"], json!(20));
    assert_eq!(value["cost"], json!(0));
    assert_eq!(value["calories"], json!(30));

    Ok(())
}
