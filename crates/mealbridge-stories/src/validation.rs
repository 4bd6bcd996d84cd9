//! Submission validation.
//!
//! Checks run in a fixed order and short-circuit on the first violation:
//! authentication, then required fields, then the content length floor.
//! No network call happens before validation passes.

use mealbridge_core::constants::MIN_STORY_CONTENT_CHARS;
use mealbridge_core::models::AuthUser;

use crate::error::SubmitError;
use crate::form::StoryForm;

/// Validate a submission attempt, returning the authenticated user on success.
///
/// The length check counts characters of the raw content; only the emptiness
/// check trims.
pub fn validate_submission<'a>(
    user: Option<&'a AuthUser>,
    form: &StoryForm,
) -> Result<&'a AuthUser, SubmitError> {
    let user = user.ok_or(SubmitError::NotSignedIn)?;

    if form.title().trim().is_empty() || form.content().trim().is_empty() {
        return Err(SubmitError::MissingFields);
    }

    let chars = form.content().chars().count();
    if chars < MIN_STORY_CONTENT_CHARS {
        return Err(SubmitError::ContentTooShort { chars });
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use uuid::Uuid;

    fn user() -> AuthUser {
        AuthUser::new(Uuid::new_v4()).with_display_name("Dana")
    }

    fn form_with(title: &str, content: &str) -> StoryForm {
        let mut form = StoryForm::new();
        form.set_field(FormField::Title, title).unwrap();
        form.set_field(FormField::Content, content).unwrap();
        form
    }

    #[test]
    fn missing_user_is_rejected_first() {
        let form = form_with("", "");
        assert!(matches!(
            validate_submission(None, &form),
            Err(SubmitError::NotSignedIn)
        ));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let user = user();

        let form = form_with("   ", &"a".repeat(60));
        assert!(matches!(
            validate_submission(Some(&user), &form),
            Err(SubmitError::MissingFields)
        ));

        let form = form_with("A title", "   ");
        assert!(matches!(
            validate_submission(Some(&user), &form),
            Err(SubmitError::MissingFields)
        ));
    }

    #[test]
    fn content_length_floor_is_exactly_fifty() {
        let user = user();

        let form = form_with("A title", &"a".repeat(49));
        match validate_submission(Some(&user), &form) {
            Err(SubmitError::ContentTooShort { chars }) => assert_eq!(chars, 49),
            other => panic!("expected ContentTooShort, got {:?}", other.map(|_| ())),
        }

        let form = form_with("A title", &"a".repeat(50));
        assert!(validate_submission(Some(&user), &form).is_ok());
    }
}
