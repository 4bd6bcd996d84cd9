//! Test helpers: build a story modal wired to in-memory backends.
//!
//! Run from workspace root: `cargo test -p mealbridge-stories`.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use mealbridge_core::constants::STORIES_COLLECTION;
use mealbridge_core::models::{AuthUser, Story};
use mealbridge_core::ManualClock;
use mealbridge_db::{DocumentStore, MemoryDocumentStore};
use mealbridge_storage::MemoryStorage;
use mealbridge_stories::{ModalHost, SelectedImage, StoryModal, StorySubmissionService};

static TELEMETRY: Once = Once::new();

fn init_test_telemetry() {
    TELEMETRY.call_once(|| {
        let _ = mealbridge_core::init_telemetry();
    });
}

/// Host double counting callback invocations.
#[derive(Default)]
pub struct RecordingHost {
    saved: AtomicUsize,
    closed: AtomicUsize,
}

impl RecordingHost {
    pub fn saved_count(&self) -> usize {
        self.saved.load(Ordering::SeqCst)
    }

    pub fn closed_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl ModalHost for RecordingHost {
    fn on_story_saved(&self) {
        self.saved.fetch_add(1, Ordering::SeqCst);
    }

    fn on_close(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test application: modal plus owned backends and probes.
pub struct TestApp {
    pub storage: MemoryStorage,
    pub documents: MemoryDocumentStore,
    pub clock: Arc<ManualClock>,
    pub host: Arc<RecordingHost>,
    pub modal: StoryModal,
}

/// Fixed submission time every test starts from.
pub fn test_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn setup_modal() -> TestApp {
    init_test_telemetry();

    let storage = MemoryStorage::new();
    let documents = MemoryDocumentStore::new();
    let clock = Arc::new(ManualClock::new(test_start()));
    let host = Arc::new(RecordingHost::default());

    let service = StorySubmissionService::new(
        Arc::new(storage.clone()),
        Arc::new(documents.clone()),
        clock.clone(),
    );
    let modal = StoryModal::new(service, host.clone());

    TestApp {
        storage,
        documents,
        clock,
        host,
        modal,
    }
}

pub fn make_user() -> AuthUser {
    AuthUser::new(Uuid::new_v4())
        .with_display_name("Dana")
        .with_email("dana@example.org")
}

pub fn image(name: &str) -> SelectedImage {
    SelectedImage::new(name, "image/png", vec![0xde, 0xad, 0xbe, 0xef])
}

/// URL the in-memory backend hands out for a story image key.
pub fn expected_image_url(uid: Uuid, timestamp_ms: i64, filename: &str) -> String {
    format!(
        "memory://stories/storyImages/{}_{}_{}",
        uid, timestamp_ms, filename
    )
}

/// Persist a story authored by `author` and return it as the edit target.
pub async fn seed_story(
    documents: &MemoryDocumentStore,
    author: &AuthUser,
    images: &[&str],
) -> Story {
    let created_at = test_start() - chrono::Duration::days(7);
    let fields = serde_json::json!({
        "title": "Original title",
        "content": "o".repeat(60),
        "category": "community",
        "images": images,
        "author": {
            "id": author.uid,
            "name": "Dana",
            "email": "dana@example.org",
        },
        "likes": 4,
        "likedBy": [author.uid],
        "createdAt": created_at,
    });

    let fields = fields.as_object().unwrap().clone();
    let id = documents
        .create(STORIES_COLLECTION, fields.clone())
        .await
        .unwrap();

    Story::from_fields(id, &fields).unwrap()
}
