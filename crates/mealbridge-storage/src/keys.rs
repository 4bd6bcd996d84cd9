//! Shared key generation for storage backends.
//!
//! Key format: `storyImages/{uid}_{timestamp_ms}_{filename}`. The filename
//! component is sanitized first so every backend can map keys to paths safely.

use uuid::Uuid;

use crate::traits::{StorageError, StorageResult};
use mealbridge_core::constants::STORY_IMAGES_PREFIX;

const MAX_FILENAME_LENGTH: usize = 255;

/// Sanitize an original filename into a key-safe component.
///
/// Directory components are stripped, `..` sequences are rejected, and any
/// character outside `[A-Za-z0-9._-]` is replaced with `_`. Names that end up
/// empty or shorter than 3 characters collapse to `"file"`.
pub fn sanitize_filename(filename: &str) -> StorageResult<String> {
    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(StorageError::InvalidKey(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() || sanitized.len() < 3 {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

/// Generate the storage key for a story image.
///
/// The key embeds the uploading user, the upload timestamp, and the sanitized
/// original filename. All backends must use this format for consistency.
pub fn story_image_key(uid: Uuid, timestamp_ms: i64, filename: &str) -> StorageResult<String> {
    let filename = sanitize_filename(filename)?;
    Ok(format!(
        "{}/{}_{}_{}",
        STORY_IMAGES_PREFIX, uid, timestamp_ms, filename
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_filename_rejects_path_traversal() {
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("foo/../bar").is_err());
        assert!(sanitize_filename("....").is_err());
    }

    #[test]
    fn sanitize_filename_accepts_valid_names() {
        assert_eq!(sanitize_filename("image.png").unwrap(), "image.png");
        assert_eq!(sanitize_filename("my-file_1.jpg").unwrap(), "my-file_1.jpg");
    }

    #[test]
    fn sanitize_filename_strips_directories_and_odd_characters() {
        assert_eq!(
            sanitize_filename("uploads/summer photo.png").unwrap(),
            "summer_photo.png"
        );
        assert_eq!(sanitize_filename("a").unwrap(), "file");
    }

    #[test]
    fn story_image_key_has_expected_shape() {
        let uid = Uuid::nil();
        let key = story_image_key(uid, 1_700_000_000_000, "photo.png").unwrap();
        assert_eq!(
            key,
            format!("storyImages/{}_1700000000000_photo.png", uid)
        );
    }
}
