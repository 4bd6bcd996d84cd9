use mealbridge_core::constants::MIN_STORY_CONTENT_CHARS;
use mealbridge_core::AppError;
use thiserror::Error;

/// Submission failures.
///
/// Every variant is terminal for the current attempt; nothing is retried
/// automatically. `user_message` maps a failure to the message shown in the
/// modal; `InFlight` surfaces nothing because the submit control is disabled
/// while a submission runs.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no authenticated user")]
    NotSignedIn,

    #[error("title or content empty after trimming")]
    MissingFields,

    #[error("content too short: {chars} characters")]
    ContentTooShort { chars: usize },

    #[error("a submission is already in flight")]
    InFlight,

    #[error("backend failure")]
    Backend(#[source] AppError),
}

impl SubmitError {
    /// The message shown to the user, if any.
    ///
    /// Backend causes are collapsed into one generic message; the underlying
    /// error is logged but never exposed.
    pub fn user_message(&self) -> Option<String> {
        match self {
            SubmitError::NotSignedIn => Some("Please sign in to share your story.".to_string()),
            SubmitError::MissingFields => {
                Some("Please fill in both title and content.".to_string())
            }
            SubmitError::ContentTooShort { chars } => Some(format!(
                "Story content should be at least {} characters long ({}/{}).",
                MIN_STORY_CONTENT_CHARS, chars, MIN_STORY_CONTENT_CHARS
            )),
            SubmitError::Backend(_) => {
                Some("Failed to share your story. Please try again.".to_string())
            }
            SubmitError::InFlight => None,
        }
    }

    /// True for failures caught before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmitError::NotSignedIn
                | SubmitError::MissingFields
                | SubmitError::ContentTooShort { .. }
        )
    }
}
