use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

use super::user::AuthUser;
use crate::error::AppError;

/// Story category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
    #[default]
    Success,
    Impact,
    Community,
}

impl StoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryCategory::Success => "success",
            StoryCategory::Impact => "impact",
            StoryCategory::Community => "community",
        }
    }
}

impl TryFrom<&str> for StoryCategory {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "success" => Ok(StoryCategory::Success),
            "impact" => Ok(StoryCategory::Impact),
            "community" => Ok(StoryCategory::Community),
            other => Err(AppError::InvalidInput(format!(
                "unknown story category: {}",
                other
            ))),
        }
    }
}

/// Author snapshot taken at creation time; never altered on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryAuthor {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
}

impl StoryAuthor {
    /// Snapshot the current identity: display name, falling back to the
    /// email address, falling back to "Anonymous".
    pub fn from_user(user: &AuthUser) -> Self {
        let name = user
            .display_name
            .clone()
            .or_else(|| user.email.clone())
            .unwrap_or_else(|| "Anonymous".to_string());

        StoryAuthor {
            id: user.uid,
            name,
            email: user.email.clone(),
        }
    }
}

/// A community story post.
#[derive(Debug, Clone)]
pub struct Story {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: StoryCategory,
    /// Ordered image URLs; on edit, surviving existing URLs keep their
    /// original order and newly uploaded URLs are appended.
    pub images: Vec<String>,
    pub author: StoryAuthor,
    pub likes: i64,
    pub liked_by: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Wire shape of a story document's field map (camelCase, as persisted).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoryFields {
    title: String,
    content: String,
    category: StoryCategory,
    images: Vec<String>,
    author: StoryAuthor,
    likes: i64,
    liked_by: Vec<Uuid>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl Story {
    /// Rebuild a story from a persisted document field map.
    pub fn from_fields(id: Uuid, fields: &Map<String, JsonValue>) -> Result<Story, AppError> {
        let fields: StoryFields = serde_json::from_value(JsonValue::Object(fields.clone()))?;

        Ok(Story {
            id,
            title: fields.title,
            content: fields.content,
            category: fields.category,
            images: fields.images,
            author: fields.author,
            likes: fields.likes,
            liked_by: fields.liked_by,
            created_at: fields.created_at,
            updated_at: fields.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn category_round_trips_through_str() {
        for category in [
            StoryCategory::Success,
            StoryCategory::Impact,
            StoryCategory::Community,
        ] {
            assert_eq!(StoryCategory::try_from(category.as_str()).unwrap(), category);
        }
        assert!(StoryCategory::try_from("inspirational").is_err());
    }

    #[test]
    fn author_snapshot_falls_back_to_email_then_anonymous() {
        let uid = Uuid::new_v4();

        let named = AuthUser::new(uid)
            .with_display_name("Dana")
            .with_email("dana@example.org");
        assert_eq!(StoryAuthor::from_user(&named).name, "Dana");

        let email_only = AuthUser::new(uid).with_email("dana@example.org");
        let snapshot = StoryAuthor::from_user(&email_only);
        assert_eq!(snapshot.name, "dana@example.org");
        assert_eq!(snapshot.email.as_deref(), Some("dana@example.org"));

        let anonymous = AuthUser::new(uid);
        assert_eq!(StoryAuthor::from_user(&anonymous).name, "Anonymous");
    }

    #[test]
    fn story_round_trips_from_persisted_fields() {
        let uid = Uuid::new_v4();
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();

        let fields = serde_json::json!({
            "title": "How MealBridge Changed My Life",
            "content": "a".repeat(60),
            "category": "impact",
            "images": ["https://cdn.example.org/storyImages/a.png"],
            "author": { "id": uid, "name": "Dana", "email": "dana@example.org" },
            "likes": 4,
            "likedBy": [uid],
            "createdAt": created_at,
        });

        let id = Uuid::new_v4();
        let story = Story::from_fields(id, fields.as_object().unwrap()).unwrap();
        assert_eq!(story.id, id);
        assert_eq!(story.category, StoryCategory::Impact);
        assert_eq!(story.likes, 4);
        assert_eq!(story.liked_by, vec![uid]);
        assert_eq!(story.created_at, created_at);
        assert!(story.updated_at.is_none());
    }
}
