//! Form state for the story modal.

use mealbridge_core::constants::MAX_STORY_IMAGES;
use mealbridge_core::models::{Story, StoryCategory};
use mealbridge_core::AppError;

/// A newly selected image file, not yet uploaded.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl SelectedImage {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }
}

/// Settable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Category,
}

/// Composite form state: text fields, the pending new-image batch, and the
/// existing image URLs carried over when editing.
#[derive(Debug, Clone, Default)]
pub struct StoryForm {
    title: String,
    content: String,
    category: StoryCategory,
    images: Vec<SelectedImage>,
    existing_images: Vec<String>,
}

impl StoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generic field setter keyed by field name.
    ///
    /// Category values are parsed; unknown categories are rejected and leave
    /// the form unchanged.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), AppError> {
        match field {
            FormField::Title => self.title = value.to_string(),
            FormField::Content => self.content = value.to_string(),
            FormField::Category => self.category = StoryCategory::try_from(value)?,
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> StoryCategory {
        self.category
    }

    pub fn images(&self) -> &[SelectedImage] {
        &self.images
    }

    pub fn existing_images(&self) -> &[String] {
        &self.existing_images
    }

    /// Replace the pending new-image batch with at most the first
    /// `MAX_STORY_IMAGES` files; the rest are silently dropped.
    pub fn select_images(&mut self, batch: Vec<SelectedImage>) {
        self.images = batch.into_iter().take(MAX_STORY_IMAGES).collect();
    }

    /// Drop one existing image URL locally. Nothing is deleted from storage;
    /// the removed URL is simply not written back on submission.
    pub fn remove_existing_image(&mut self, index: usize) {
        if index < self.existing_images.len() {
            self.existing_images.remove(index);
        }
    }

    /// Reset to creation defaults.
    pub fn reset(&mut self) {
        *self = StoryForm::default();
    }

    /// Load all fields from an existing record and clear pending selections.
    pub fn prefill(&mut self, story: &Story) {
        self.title = story.title.clone();
        self.content = story.content.clone();
        self.category = story.category;
        self.images.clear();
        self.existing_images = story.images.clone();
    }
}
