// ABOUTME: Progress photo gallery persisted as one storage record
// ABOUTME: Add, delete, favorite, filter, and before/after comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

//! # Progress Gallery
//!
//! Photos live as a single JSON array under one storage key, newest first.
//! Every mutation rewrites the whole record, which keeps the on-disk shape
//! identical to what older app builds wrote.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::time::{DAYS_PER_MONTH, DAYS_PER_WEEK, MILLIS_PER_DAY};
use crate::errors::{AppError, AppResult};
use crate::models::{PhotoCategory, ProgressPhoto};
use crate::storage::{StorageKey, StorageProvider};

/// Input for a photo about to be added
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoto {
    /// Local file reference for the image
    pub uri: String,
    /// Free-form note
    pub note: String,
    /// Pose category
    pub category: PhotoCategory,
    /// Body weight at capture time, free text
    pub weight: Option<String>,
}

impl Default for NewPhoto {
    fn default() -> Self {
        Self {
            uri: String::new(),
            note: String::new(),
            category: PhotoCategory::Front,
            weight: None,
        }
    }
}

/// Two photos lined up as a transformation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoComparison {
    /// The chronologically earlier photo
    pub before: ProgressPhoto,
    /// The chronologically later photo
    pub after: ProgressPhoto,
    /// Whole days between the two capture times
    pub days_apart: i64,
}

/// Photo store over a storage backend
#[derive(Debug, Clone)]
pub struct ProgressGallery<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> ProgressGallery<S> {
    /// Create a gallery over the given storage backend
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Every stored photo, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage or deserialization error.
    pub async fn photos(&self) -> AppResult<Vec<ProgressPhoto>> {
        Ok(self
            .storage
            .get_json(&StorageKey::ProgressPhotos)
            .await?
            .unwrap_or_default())
    }

    /// Add a photo to the front of the gallery
    ///
    /// The id is the capture timestamp in milliseconds, bumped past any
    /// collision so ids stay unique within the gallery. A blank weight is
    /// normalized away.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the image reference is empty, or a
    /// storage error if the write fails.
    pub async fn add(&self, new_photo: NewPhoto) -> AppResult<ProgressPhoto> {
        if new_photo.uri.is_empty() {
            return Err(AppError::missing_field("Photo image"));
        }

        let mut photos = self.photos().await?;
        let now = Utc::now();
        let mut stamp = now.timestamp_millis();
        while photos.iter().any(|p| p.id == stamp.to_string()) {
            stamp += 1;
        }

        let photo = ProgressPhoto {
            id: stamp.to_string(),
            uri: new_photo.uri,
            date: now,
            note: new_photo.note,
            category: new_photo.category,
            weight: new_photo.weight.filter(|w| !w.is_empty()),
            is_favorite: false,
        };

        photos.insert(0, photo.clone());
        self.save(&photos).await?;
        Ok(photo)
    }

    /// Remove a photo by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a storage error if
    /// the write fails.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut photos = self.photos().await?;
        let len_before = photos.len();
        photos.retain(|p| p.id != id);
        if photos.len() == len_before {
            return Err(AppError::not_found(format!("Progress photo {id}")));
        }
        self.save(&photos).await
    }

    /// Flip a photo's favorite flag and return the updated photo
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a storage error if
    /// the write fails.
    pub async fn toggle_favorite(&self, id: &str) -> AppResult<ProgressPhoto> {
        let mut photos = self.photos().await?;
        let photo = photos
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("Progress photo {id}")))?;
        photo.is_favorite = !photo.is_favorite;
        let updated = photo.clone();
        self.save(&photos).await?;
        Ok(updated)
    }

    /// Photos of one category, or everything for `None`, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage or deserialization error.
    pub async fn filter(&self, category: Option<PhotoCategory>) -> AppResult<Vec<ProgressPhoto>> {
        let mut photos = self.photos().await?;
        if let Some(category) = category {
            photos.retain(|p| p.category == category);
        }
        Ok(photos)
    }

    /// Starred photos, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage or deserialization error.
    pub async fn favorites(&self) -> AppResult<Vec<ProgressPhoto>> {
        let mut photos = self.photos().await?;
        photos.retain(|p| p.is_favorite);
        Ok(photos)
    }

    /// Line two photos up as a before/after pair
    ///
    /// The earlier capture is always "before" regardless of selection
    /// order, and the gap is a whole, non-negative number of days.
    ///
    /// # Errors
    ///
    /// Returns a validation error when both ids are the same, or
    /// `ResourceNotFound` when either id is unknown.
    pub async fn compare(&self, first_id: &str, second_id: &str) -> AppResult<PhotoComparison> {
        if first_id == second_id {
            return Err(AppError::invalid_input(
                "Pick two different photos to compare",
            ));
        }
        let photos = self.photos().await?;
        let first = find_photo(&photos, first_id)?;
        let second = find_photo(&photos, second_id)?;

        let (before, after) = if first.date <= second.date {
            (first, second)
        } else {
            (second, first)
        };
        let days_apart =
            (after.date.timestamp_millis() - before.date.timestamp_millis()) / MILLIS_PER_DAY;

        Ok(PhotoComparison {
            before: before.clone(),
            after: after.clone(),
            days_apart,
        })
    }

    /// Replace the whole stored collection with `photos`
    ///
    /// Every mutation reserializes the entire array; this is the same
    /// write the mutating operations perform, exposed for callers that
    /// import or reorder a set wholesale.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend write fails.
    pub async fn save(&self, photos: &[ProgressPhoto]) -> AppResult<()> {
        self.storage
            .set_json(&StorageKey::ProgressPhotos, &photos)
            .await?;
        debug!(count = photos.len(), "progress photos saved");
        Ok(())
    }
}

fn find_photo<'a>(photos: &'a [ProgressPhoto], id: &str) -> AppResult<&'a ProgressPhoto> {
    photos
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::not_found(format!("Progress photo {id}")))
}

/// Friendly age of a capture date relative to `now`
///
/// Buckets whole elapsed days the way the gallery labels photos: `Today`,
/// `Yesterday`, days under a week, weeks under a month, then months. Future
/// dates read as `Today`.
#[must_use]
pub fn relative_age(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now.timestamp_millis() - date.timestamp_millis())
        .div_euclid(MILLIS_PER_DAY)
        .max(0);
    match days {
        0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        d if d < DAYS_PER_WEEK => format!("{d} days ago"),
        d if d < DAYS_PER_MONTH => format!("{} weeks ago", d / DAYS_PER_WEEK),
        d => format!("{} months ago", d / DAYS_PER_MONTH),
    }
}

/// Capture date as shown on photo cards, e.g. `Aug 22, 2026`
#[must_use]
pub fn display_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::storage::MemoryStorage;

    fn gallery() -> ProgressGallery<MemoryStorage> {
        ProgressGallery::new(MemoryStorage::new())
    }

    fn draft(uri: &str, category: PhotoCategory) -> NewPhoto {
        NewPhoto {
            uri: uri.to_owned(),
            category,
            ..NewPhoto::default()
        }
    }

    #[tokio::test]
    async fn test_add_prepends_and_defaults_unfavorited() {
        let gallery = gallery();
        gallery
            .add(draft("file:///a.jpg", PhotoCategory::Front))
            .await
            .unwrap();
        let second = gallery
            .add(draft("file:///b.jpg", PhotoCategory::Back))
            .await
            .unwrap();

        let photos = gallery.photos().await.unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, second.id);
        assert!(!photos[0].is_favorite);
    }

    #[tokio::test]
    async fn test_add_rejects_missing_image() {
        let gallery = gallery();
        assert!(gallery
            .add(draft("", PhotoCategory::Front))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_ids_stay_unique_under_rapid_adds() {
        let gallery = gallery();
        for i in 0..5 {
            gallery
                .add(draft(&format!("file:///{i}.jpg"), PhotoCategory::Other))
                .await
                .unwrap();
        }
        let photos = gallery.photos().await.unwrap();
        let mut ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_delete_removes_and_rejects_unknown() {
        let gallery = gallery();
        let photo = gallery
            .add(draft("file:///a.jpg", PhotoCategory::Side))
            .await
            .unwrap();

        gallery.delete(&photo.id).await.unwrap();
        assert!(gallery.photos().await.unwrap().is_empty());
        assert!(gallery.delete(&photo.id).await.is_err());
    }

    #[tokio::test]
    async fn test_toggle_favorite_flips_and_persists() {
        let gallery = gallery();
        let photo = gallery
            .add(draft("file:///a.jpg", PhotoCategory::Flexing))
            .await
            .unwrap();

        let updated = gallery.toggle_favorite(&photo.id).await.unwrap();
        assert!(updated.is_favorite);
        assert_eq!(gallery.favorites().await.unwrap().len(), 1);

        let reverted = gallery.toggle_favorite(&photo.id).await.unwrap();
        assert!(!reverted.is_favorite);
        assert!(gallery.favorites().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filter_by_category() {
        let gallery = gallery();
        gallery
            .add(draft("file:///a.jpg", PhotoCategory::Front))
            .await
            .unwrap();
        gallery
            .add(draft("file:///b.jpg", PhotoCategory::Back))
            .await
            .unwrap();

        let fronts = gallery.filter(Some(PhotoCategory::Front)).await.unwrap();
        assert_eq!(fronts.len(), 1);
        assert_eq!(fronts[0].category, PhotoCategory::Front);
        assert_eq!(gallery.filter(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_compare_orders_chronologically() {
        let gallery = gallery();
        let now = Utc::now();
        let older = ProgressPhoto {
            id: "100".to_owned(),
            uri: "file:///old.jpg".to_owned(),
            date: now - Duration::days(30),
            note: String::new(),
            category: PhotoCategory::Front,
            weight: Some("82 kg".to_owned()),
            is_favorite: false,
        };
        let newer = ProgressPhoto {
            id: "200".to_owned(),
            uri: "file:///new.jpg".to_owned(),
            date: now,
            note: String::new(),
            category: PhotoCategory::Front,
            weight: Some("78 kg".to_owned()),
            is_favorite: false,
        };
        gallery
            .storage
            .set_json(&StorageKey::ProgressPhotos, &vec![newer, older])
            .await
            .unwrap();

        // Selected newest-first; the comparison still reads oldest as before
        let comparison = gallery.compare("200", "100").await.unwrap();
        assert_eq!(comparison.before.id, "100");
        assert_eq!(comparison.after.id, "200");
        assert_eq!(comparison.days_apart, 30);
    }

    #[tokio::test]
    async fn test_compare_rejects_same_photo() {
        let gallery = gallery();
        assert!(gallery.compare("1", "1").await.is_err());
    }

    #[test]
    fn test_relative_age_buckets() {
        let now = Utc::now();
        assert_eq!(relative_age(now, now), "Today");
        assert_eq!(relative_age(now - Duration::days(1), now), "Yesterday");
        assert_eq!(relative_age(now - Duration::days(3), now), "3 days ago");
        assert_eq!(relative_age(now - Duration::days(10), now), "1 weeks ago");
        assert_eq!(relative_age(now - Duration::days(45), now), "1 months ago");
        assert_eq!(relative_age(now + Duration::days(2), now), "Today");
    }
}
