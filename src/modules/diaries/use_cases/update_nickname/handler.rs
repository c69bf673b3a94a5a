use crate::modules::diaries::errors::ApplicationError;
use crate::shared::core::primitives::Session;
use crate::shared::infrastructure::backend::UserDirectory;
use crate::shared::infrastructure::in_flight::{Action, InFlightRegistry};
use std::sync::Arc;
use tracing::{error, info};

pub const BLANK_NICKNAME: &str = "nickname must not be blank";

pub struct UpdateNicknameHandler<TUsers>
where
    TUsers: UserDirectory + 'static,
{
    users: Arc<TUsers>,
    in_flight: Arc<InFlightRegistry>,
}

impl<TUsers> UpdateNicknameHandler<TUsers>
where
    TUsers: UserDirectory + 'static,
{
    pub fn new(users: Arc<TUsers>, in_flight: Arc<InFlightRegistry>) -> Self {
        Self { users, in_flight }
    }

    /// Stores the trimmed nickname and returns it.
    pub async fn handle(&self, session: &Session, nickname: &str) -> Result<String, ApplicationError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(ApplicationError::Domain(BLANK_NICKNAME.into()));
        }

        let _guard = self
            .in_flight
            .try_begin(session.user_id(), Action::UpdateNickname)
            .ok_or(ApplicationError::Busy(Action::UpdateNickname))?;

        self.users
            .update_nickname(session.user_id(), nickname)
            .await
            .inspect_err(|e| error!(error = %e, user_id = %session.user_id, "failed to update nickname"))?;
        info!(user_id = %session.user_id, "nickname updated");
        Ok(nickname.to_string())
    }
}
