use crate::shared::infrastructure::backend::BackendError;
use crate::shared::infrastructure::in_flight::Action;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("authentication required")]
    AuthRequired,

    #[error("mutation rejected: {0}")]
    MutationRejected(String),

    #[error("upload failed: {0}")]
    UploadFailure(#[source] BackendError),

    #[error("{0} already in progress")]
    Busy(Action),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("domain rejected: {0}")]
    Domain(String),
}
