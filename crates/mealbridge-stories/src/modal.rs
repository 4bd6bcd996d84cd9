//! Modal controller for the story form.
//!
//! Owns the form state, the enumerated submission status, and the host
//! callbacks. One submission at a time: the status is set before the first
//! suspension point and both submit and close refuse re-entry until the
//! attempt resolves.

use std::sync::Arc;
use std::time::Duration;

use mealbridge_core::constants::SUCCESS_CLOSE_DELAY_MS;
use mealbridge_core::models::{AuthUser, Story};

use crate::error::SubmitError;
use crate::form::StoryForm;
use crate::status::SubmissionStatus;
use crate::submit::{StorySubmissionService, SubmissionOutcome};
use crate::validation::validate_submission;

/// Host (parent container) callbacks.
pub trait ModalHost: Send + Sync {
    /// A story was created or updated. Fired exactly once per success.
    fn on_story_saved(&self);

    /// The modal was dismissed.
    fn on_close(&self);
}

pub struct StoryModal {
    service: StorySubmissionService,
    host: Arc<dyn ModalHost>,
    form: StoryForm,
    status: SubmissionStatus,
    editing: Option<Story>,
    is_open: bool,
    error: Option<String>,
    success: Option<String>,
    close_delay: Duration,
}

impl StoryModal {
    pub fn new(service: StorySubmissionService, host: Arc<dyn ModalHost>) -> Self {
        Self {
            service,
            host,
            form: StoryForm::new(),
            status: SubmissionStatus::Idle,
            editing: None,
            is_open: false,
            error: None,
            success: None,
            close_delay: Duration::from_millis(SUCCESS_CLOSE_DELAY_MS),
        }
    }

    pub fn form(&self) -> &StoryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut StoryForm {
        &mut self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn editing(&self) -> Option<&Story> {
        self.editing.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Open in creation mode: all fields reset to defaults.
    pub fn open_for_create(&mut self) {
        self.editing = None;
        self.form.reset();
        self.reopen();
    }

    /// Open in edit mode: fields re-initialized from the record.
    pub fn open_for_edit(&mut self, story: Story) {
        self.form.prefill(&story);
        self.editing = Some(story);
        self.reopen();
    }

    fn reopen(&mut self) {
        self.is_open = true;
        self.status = SubmissionStatus::Idle;
        self.error = None;
        self.success = None;
    }

    fn set_status(&mut self, status: SubmissionStatus) {
        tracing::debug!(status = status.as_str(), "Submission status changed");
        self.status = status;
    }

    /// Dismiss the modal. Refused while a submission is in flight (including
    /// the success window before the delayed close); returns whether the
    /// modal actually closed.
    pub fn close(&mut self) -> bool {
        if self.status.is_busy() || self.status == SubmissionStatus::Succeeded {
            return false;
        }

        self.is_open = false;
        self.error = None;
        self.success = None;
        self.host.on_close();
        true
    }

    /// Run one submission attempt.
    ///
    /// Validation failures return the status to Idle; upload or persistence
    /// failures land in Failed with the form intact. On success the host is
    /// notified, then after the fixed delay the modal closes and all local
    /// state resets.
    pub async fn submit(
        &mut self,
        user: Option<&AuthUser>,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if self.status.is_busy() || self.status == SubmissionStatus::Succeeded {
            return Err(SubmitError::InFlight);
        }

        self.error = None;
        self.success = None;

        self.set_status(SubmissionStatus::Validating);
        let user = match validate_submission(user, &self.form) {
            Ok(user) => user,
            Err(err) => {
                self.set_status(SubmissionStatus::Idle);
                self.error = err.user_message();
                return Err(err);
            }
        };

        self.set_status(SubmissionStatus::Uploading);
        let image_urls = match self.service.upload_images(user, &self.form).await {
            Ok(urls) => urls,
            Err(err) => return self.fail(err),
        };

        self.set_status(SubmissionStatus::Persisting);
        let outcome = match self
            .service
            .persist(user, &self.form, image_urls, self.editing.as_ref())
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => return self.fail(err),
        };

        self.set_status(SubmissionStatus::Succeeded);
        self.success = Some(outcome.success_message().to_string());
        self.host.on_story_saved();

        tokio::time::sleep(self.close_delay).await;

        self.host.on_close();
        self.form.reset();
        self.editing = None;
        self.is_open = false;
        self.error = None;
        self.success = None;
        self.set_status(SubmissionStatus::Idle);

        Ok(outcome)
    }

    fn fail(&mut self, err: SubmitError) -> Result<SubmissionOutcome, SubmitError> {
        self.set_status(SubmissionStatus::Failed);
        self.error = err.user_message();
        Err(err)
    }
}
