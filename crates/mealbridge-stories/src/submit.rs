//! Submission workflow: upload images, then write one document.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use mealbridge_core::constants::STORIES_COLLECTION;
use mealbridge_core::models::{AuthUser, Story, StoryAuthor};
use mealbridge_core::{AppError, Clock};
use mealbridge_db::{DocStoreError, DocumentStore, FieldMap};
use mealbridge_storage::{story_image_key, Storage, StorageError};

use crate::error::SubmitError;
use crate::form::StoryForm;
use crate::validation::validate_submission;

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Created { id: Uuid },
    Updated { id: Uuid },
}

impl SubmissionOutcome {
    pub fn id(&self) -> Uuid {
        match self {
            SubmissionOutcome::Created { id } | SubmissionOutcome::Updated { id } => *id,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            SubmissionOutcome::Created { .. } => {
                "Your story has been shared with the community!"
            }
            SubmissionOutcome::Updated { .. } => "Your story has been successfully updated!",
        }
    }
}

fn storage_err(err: StorageError) -> SubmitError {
    SubmitError::Backend(AppError::Storage(err.to_string()))
}

fn doc_err(err: DocStoreError) -> SubmitError {
    SubmitError::Backend(AppError::DocumentStore(err.to_string()))
}

fn encode_err(err: serde_json::Error) -> SubmitError {
    SubmitError::Backend(AppError::Internal(format!(
        "failed to encode story fields: {}",
        err
    )))
}

/// Orchestrates the create/edit workflow against the storage and document
/// store boundaries. All phases run strictly sequentially; the only
/// suspension points are the per-image uploads and the single document write.
pub struct StorySubmissionService {
    storage: Arc<dyn Storage>,
    documents: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl StorySubmissionService {
    pub fn new(
        storage: Arc<dyn Storage>,
        documents: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            documents,
            clock,
        }
    }

    /// Upload the pending image batch one file at a time.
    ///
    /// The returned list is seeded with the surviving existing URLs, so new
    /// uploads always append after them. Already-uploaded images are not
    /// rolled back when a later upload fails.
    pub async fn upload_images(
        &self,
        user: &AuthUser,
        form: &StoryForm,
    ) -> Result<Vec<String>, SubmitError> {
        let mut image_urls: Vec<String> = form.existing_images().to_vec();

        for image in form.images() {
            let key = story_image_key(user.uid, self.clock.now_millis(), &image.filename)
                .map_err(storage_err)?;

            self.storage
                .upload(&key, &image.content_type, image.data.clone())
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, key = %key, "Story image upload failed");
                    storage_err(e)
                })?;

            let url = self.storage.public_url(&key).await.map_err(storage_err)?;

            tracing::debug!(key = %key, url = %url, "Story image uploaded");

            image_urls.push(url);
        }

        Ok(image_urls)
    }

    /// Write the story document: update the edited record, or insert a new
    /// one with the author snapshot and zeroed counters.
    pub async fn persist(
        &self,
        user: &AuthUser,
        form: &StoryForm,
        image_urls: Vec<String>,
        editing: Option<&Story>,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let now = self.clock.now();

        let mut fields = FieldMap::new();
        fields.insert("title".to_string(), json!(form.title().trim()));
        fields.insert("content".to_string(), json!(form.content().trim()));
        fields.insert(
            "category".to_string(),
            json!(form.category().as_str()),
        );
        fields.insert("images".to_string(), json!(image_urls));

        if let Some(story) = editing {
            fields.insert(
                "updatedAt".to_string(),
                serde_json::to_value(now).map_err(encode_err)?,
            );

            self.documents
                .update(STORIES_COLLECTION, story.id, fields)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, story_id = %story.id, "Story update failed");
                    doc_err(e)
                })?;

            tracing::info!(story_id = %story.id, "Story updated");

            Ok(SubmissionOutcome::Updated { id: story.id })
        } else {
            let author = StoryAuthor::from_user(user);
            fields.insert(
                "author".to_string(),
                serde_json::to_value(&author).map_err(encode_err)?,
            );
            fields.insert("likes".to_string(), json!(0));
            fields.insert("likedBy".to_string(), json!([]));
            fields.insert(
                "createdAt".to_string(),
                serde_json::to_value(now).map_err(encode_err)?,
            );

            let id = self
                .documents
                .create(STORIES_COLLECTION, fields)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Story create failed");
                    doc_err(e)
                })?;

            tracing::info!(story_id = %id, author_id = %author.id, "Story created");

            Ok(SubmissionOutcome::Created { id })
        }
    }

    /// Complete workflow: validate → upload images → persist.
    ///
    /// Library entry point for hosts that do not use the modal controller.
    pub async fn submit(
        &self,
        user: Option<&AuthUser>,
        form: &StoryForm,
        editing: Option<&Story>,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let user = validate_submission(user, form)?;
        let image_urls = self.upload_images(user, form).await?;
        self.persist(user, form, image_urls, editing).await
    }
}
