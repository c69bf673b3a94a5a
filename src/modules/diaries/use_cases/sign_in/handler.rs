use crate::modules::diaries::core::user::fallback_nickname;
use crate::modules::diaries::errors::ApplicationError;
use crate::shared::core::primitives::Session;
use crate::shared::infrastructure::backend::{AuthGateway, BackendError, UserDirectory};
use std::sync::Arc;
use tracing::{info, warn};

pub struct SignInHandler<TAuth, TUsers>
where
    TAuth: AuthGateway + 'static,
    TUsers: UserDirectory + 'static,
{
    auth: Arc<TAuth>,
    users: Arc<TUsers>,
    login_domain: String,
}

impl<TAuth, TUsers> SignInHandler<TAuth, TUsers>
where
    TAuth: AuthGateway + 'static,
    TUsers: UserDirectory + 'static,
{
    pub fn new(auth: Arc<TAuth>, users: Arc<TUsers>, login_domain: impl Into<String>) -> Self {
        Self {
            auth,
            users,
            login_domain: login_domain.into(),
        }
    }

    /// Usernames are the local part of a synthetic email on the login domain.
    pub fn email_for(&self, username: &str) -> String {
        format!("{}@{}", username.trim(), self.login_domain)
    }

    pub async fn handle(&self, username: &str, password: &str) -> Result<Session, ApplicationError> {
        let email = self.email_for(username);
        let session = self
            .auth
            .sign_in(&email, password)
            .await
            .map_err(|e| match e {
                BackendError::InvalidCredentials => ApplicationError::AuthRequired,
                other => ApplicationError::Backend(other),
            })
            .inspect_err(|e| warn!(error = %e, %email, "sign in failed"))?;

        self.ensure_default_nickname(&session).await;
        info!(user_id = %session.user_id, "signed in");
        Ok(session)
    }

    // Seeds the nickname with the username on first sign-in. Never fails the sign-in.
    async fn ensure_default_nickname(&self, session: &Session) {
        let has_nickname = match self.users.find_user(session.user_id()).await {
            Ok(user) => user.is_some_and(|user| user.display_name().is_some()),
            Err(e) => {
                warn!(error = %e, user_id = %session.user_id, "failed to read user row");
                return;
            }
        };
        if has_nickname {
            return;
        }
        let nickname = fallback_nickname(&session.email);
        if let Err(e) = self.users.update_nickname(session.user_id(), &nickname).await {
            warn!(error = %e, user_id = %session.user_id, "failed to set default nickname");
        }
    }
}
