use crate::modules::diaries::use_cases::attach_images::handler::AttachImagesHandler;
use crate::modules::diaries::use_cases::hide_entry::handler::HideEntryHandler;
use crate::modules::diaries::use_cases::list_feed::handler::ListFeedHandler;
use crate::modules::diaries::use_cases::publish_entry::handler::PublishEntryHandler;
use crate::modules::diaries::use_cases::sign_in::handler::SignInHandler;
use crate::modules::diaries::use_cases::update_nickname::handler::UpdateNicknameHandler;
use crate::shared::infrastructure::backend::AuthGateway;
use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
use crate::shared::infrastructure::in_flight::InFlightRegistry;
use crate::shared::time::clock::ClockReading;
use crate::shell::config::AppConfig;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthGateway>,
    pub list_feed: Arc<ListFeedHandler<InMemoryBackend, InMemoryBackend>>,
    pub publish_entry: Arc<PublishEntryHandler<InMemoryBackend>>,
    pub hide_entry: Arc<HideEntryHandler<InMemoryBackend>>,
    pub update_nickname: Arc<UpdateNicknameHandler<InMemoryBackend>>,
    pub sign_in: Arc<SignInHandler<InMemoryBackend, InMemoryBackend>>,
    pub attach_images: Arc<AttachImagesHandler<InMemoryBackend>>,
    pub clock: watch::Receiver<ClockReading>,
}

impl AppState {
    /// Wires every handler onto one in-memory backend, sharing a single
    /// in-flight registry.
    pub fn in_memory(
        backend: Arc<InMemoryBackend>,
        config: &AppConfig,
        clock: watch::Receiver<ClockReading>,
    ) -> Self {
        let in_flight = InFlightRegistry::new();
        Self {
            auth: backend.clone(),
            list_feed: Arc::new(ListFeedHandler::new(
                backend.clone(),
                backend.clone(),
                config.zones,
            )),
            publish_entry: Arc::new(PublishEntryHandler::new(
                backend.clone(),
                config.zones.source,
                in_flight.clone(),
            )),
            hide_entry: Arc::new(HideEntryHandler::new(backend.clone(), in_flight.clone())),
            update_nickname: Arc::new(UpdateNicknameHandler::new(
                backend.clone(),
                in_flight.clone(),
            )),
            sign_in: Arc::new(SignInHandler::new(
                backend.clone(),
                backend.clone(),
                config.login_domain.clone(),
            )),
            attach_images: Arc::new(AttachImagesHandler::new(
                backend,
                config.image_bucket.clone(),
                in_flight,
            )),
            clock,
        }
    }
}
