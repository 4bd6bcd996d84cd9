//! Submission state machine.

/// States of one submission attempt.
///
/// Idle → Validating → Uploading → Persisting → Succeeded | Failed.
/// Validation failures return to Idle; post-validation failures land in
/// Failed with the form intact for retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Uploading,
    Persisting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// True while a submission is actively running. The submit and cancel
    /// controls are disabled while busy.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Validating
                | SubmissionStatus::Uploading
                | SubmissionStatus::Persisting
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Validating => "validating",
            SubmissionStatus::Uploading => "uploading",
            SubmissionStatus::Persisting => "persisting",
            SubmissionStatus::Succeeded => "succeeded",
            SubmissionStatus::Failed => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_covers_the_active_phases_only() {
        assert!(!SubmissionStatus::Idle.is_busy());
        assert!(SubmissionStatus::Validating.is_busy());
        assert!(SubmissionStatus::Uploading.is_busy());
        assert!(SubmissionStatus::Persisting.is_busy());
        assert!(!SubmissionStatus::Succeeded.is_busy());
        assert!(!SubmissionStatus::Failed.is_busy());
    }
}
