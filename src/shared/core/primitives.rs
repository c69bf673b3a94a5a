use serde::{Deserialize, Serialize};

pub type UserId = String;
pub type EntryId = i64;

/// Nickname shown when an author row cannot be resolved.
pub const UNKNOWN_USER: &str = "unknown user";

/// The signed-in caller. Passed explicitly into every use case that needs a
/// viewer or an actor; there is no ambient session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub access_token: String,
}

impl Session {
    pub fn new(
        user_id: impl Into<UserId>,
        email: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            access_token: access_token.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
