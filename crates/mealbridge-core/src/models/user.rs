use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user snapshot supplied by the identity provider.
///
/// Absence of a value means "not authenticated"; the submission workflow
/// takes `Option<&AuthUser>` and never looks the user up itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: Uuid,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl AuthUser {
    pub fn new(uid: Uuid) -> Self {
        Self {
            uid,
            display_name: None,
            email: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
