use crate::modules::diaries::errors::ApplicationError;
use crate::modules::diaries::use_cases::attach_images::draft::ImageDraft;
use crate::shared::core::primitives::Session;
use crate::shared::infrastructure::backend::BlobStore;
use crate::shared::infrastructure::in_flight::{Action, InFlightRegistry};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

const DEFAULT_EXTENSION: &str = "bin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    fn extension(&self) -> &str {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .unwrap_or(DEFAULT_EXTENSION)
    }

    /// Random object name keeping the original extension.
    fn storage_name(&self) -> String {
        format!("{}.{}", Uuid::now_v7(), self.extension())
    }
}

pub struct AttachImagesHandler<TBlobs>
where
    TBlobs: BlobStore + 'static,
{
    blobs: Arc<TBlobs>,
    bucket: String,
    in_flight: Arc<InFlightRegistry>,
}

impl<TBlobs> AttachImagesHandler<TBlobs>
where
    TBlobs: BlobStore + 'static,
{
    pub fn new(blobs: Arc<TBlobs>, bucket: impl Into<String>, in_flight: Arc<InFlightRegistry>) -> Self {
        Self {
            blobs,
            bucket: bucket.into(),
            in_flight,
        }
    }

    /// Uploads `files` in order and appends their URLs to `draft`.
    ///
    /// All or nothing: if any upload fails the draft is left as it was and
    /// the URLs uploaded so far in this batch are dropped.
    pub async fn handle(
        &self,
        session: &Session,
        draft: &mut ImageDraft,
        files: Vec<ImageFile>,
    ) -> Result<usize, ApplicationError> {
        let _guard = self
            .in_flight
            .try_begin(session.user_id(), Action::AttachImages)
            .ok_or(ApplicationError::Busy(Action::AttachImages))?;

        let mut uploaded = Vec::with_capacity(files.len());
        for file in files {
            let name = file.storage_name();
            let url = self
                .blobs
                .upload_image(&self.bucket, &name, file.bytes)
                .await
                .map_err(ApplicationError::UploadFailure)
                .inspect_err(|e| {
                    error!(error = %e, user_id = %session.user_id, file = %file.name, "image upload failed")
                })?;
            uploaded.push(url);
        }

        let count = uploaded.len();
        draft.extend(uploaded);
        info!(user_id = %session.user_id, count, "images attached");
        Ok(count)
    }
}
