use crate::shared::core::primitives::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nickname: Option<String>,
}

impl User {
    pub fn new(id: impl Into<UserId>, nickname: Option<&str>) -> Self {
        Self {
            id: id.into(),
            nickname: nickname.map(str::to_string),
        }
    }

    /// The nickname if one is set and not blank.
    pub fn display_name(&self) -> Option<&str> {
        self.nickname
            .as_deref()
            .map(str::trim)
            .filter(|nickname| !nickname.is_empty())
    }
}

/// Default nickname for an account that never chose one: the local part of
/// its login email, which is the username it signed in with.
pub fn fallback_nickname(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod user_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Ann"), Some("Ann"))]
    #[case(Some("  Ann  "), Some("Ann"))]
    #[case(Some("   "), None)]
    #[case(None, None)]
    fn it_should_only_display_a_real_nickname(
        #[case] nickname: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(User::new("user-ann", nickname).display_name(), expected);
    }

    #[rstest]
    #[case("ann@local.com", "ann")]
    #[case("ann", "ann")]
    #[case("", "")]
    fn it_should_derive_the_fallback_from_the_email(#[case] email: &str, #[case] expected: &str) {
        assert_eq!(fallback_nickname(email), expected);
    }
}
