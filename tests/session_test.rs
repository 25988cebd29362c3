// ABOUTME: Integration tests for the session and profile store
// ABOUTME: Covers login, signup, logout, and partial profile merges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use gymfit_core::errors::ErrorCode;
use gymfit_core::models::{ActivityLevel, Gender, ProfileUpdate, UserProfile};
use gymfit_core::session::SessionManager;
use gymfit_core::storage::MemoryStorage;

/// Helper: Create a session manager over fresh in-memory storage
fn test_sessions() -> SessionManager<MemoryStorage> {
    SessionManager::new(MemoryStorage::new())
}

#[tokio::test]
async fn test_login_and_current_user() -> Result<()> {
    let sessions = test_sessions();

    let user = sessions.login("priya.sharma@example.com", "secret1").await?;
    assert_eq!(user.email, "priya.sharma@example.com");
    assert_eq!(user.name, "priya.sharma");

    // The auth record round-trips through storage
    let current = sessions.current_user().await?;
    assert_eq!(current.map(|u| u.id), Some(user.id));

    Ok(())
}

#[tokio::test]
async fn test_login_replaces_previous_session() -> Result<()> {
    let sessions = test_sessions();

    sessions.login("first@example.com", "secret1").await?;
    sessions.login("second@example.com", "secret2").await?;

    let current = sessions.current_user().await?.unwrap();
    assert_eq!(current.email, "second@example.com");

    Ok(())
}

#[tokio::test]
async fn test_login_validation_errors() {
    let sessions = test_sessions();

    let err = sessions.login("", "secret1").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let err = sessions.login("not-an-email", "secret1").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);

    let err = sessions.login("alex@example.com", "tiny").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    // None of the failures should have stored a session
    assert!(sessions.current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_signup_uses_given_name() -> Result<()> {
    let sessions = test_sessions();

    let user = sessions
        .signup("rahul@example.com", "password123", "  Rahul Verma  ")
        .await?;
    assert_eq!(user.name, "Rahul Verma");
    assert_eq!(user.email, "rahul@example.com");

    let current = sessions.current_user().await?.unwrap();
    assert_eq!(current.name, "Rahul Verma");

    Ok(())
}

#[tokio::test]
async fn test_signup_validation_errors() {
    let sessions = test_sessions();

    // Six characters pass at login but signup requires eight
    let err = sessions
        .signup("rahul@example.com", "secret1", "Rahul")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = sessions
        .signup("rahul@example.com", "password123", "   ")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[tokio::test]
async fn test_logout_keeps_profile() -> Result<()> {
    let sessions = test_sessions();

    sessions.login("maya@example.com", "secret1").await?;
    sessions
        .update_profile(ProfileUpdate {
            height_cm: Some(165.0),
            weight_kg: Some(58.0),
            ..ProfileUpdate::default()
        })
        .await?;

    sessions.logout().await?;

    assert!(sessions.current_user().await?.is_none());
    let profile = sessions.profile().await?;
    assert_eq!(profile.height_cm, Some(165.0));
    assert_eq!(profile.weight_kg, Some(58.0));

    Ok(())
}

#[tokio::test]
async fn test_logout_without_session_is_fine() -> Result<()> {
    let sessions = test_sessions();
    sessions.logout().await?;
    assert!(sessions.current_user().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_profile_update_merges_fields() -> Result<()> {
    let sessions = test_sessions();

    sessions
        .update_profile(ProfileUpdate {
            height_cm: Some(180.0),
            weight_kg: Some(80.0),
            ..ProfileUpdate::default()
        })
        .await?;

    // A later partial update must not clobber earlier fields
    let merged = sessions
        .update_profile(ProfileUpdate {
            age: Some(29),
            gender: Some(Gender::Male),
            activity_level: Some(ActivityLevel::Moderate),
            ..ProfileUpdate::default()
        })
        .await?;

    assert_eq!(merged.height_cm, Some(180.0));
    assert_eq!(merged.weight_kg, Some(80.0));
    assert_eq!(merged.age, Some(29));
    assert_eq!(merged.gender, Some(Gender::Male));
    assert_eq!(merged.activity_level, Some(ActivityLevel::Moderate));

    // The merge result is what storage now holds
    assert_eq!(sessions.profile().await?, merged);

    Ok(())
}

#[tokio::test]
async fn test_profile_defaults_to_empty() -> Result<()> {
    let sessions = test_sessions();
    assert_eq!(sessions.profile().await?, UserProfile::default());
    Ok(())
}
