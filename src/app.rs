use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Subscription, Task};

use crate::adapters::{ComposerDraftStore, GiphySearchProvider, HttpImageFetcher};
use crate::core::models::PickerSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::presentation::ComposerView;

pub struct GifPickerApp {
    orchestrator: AppOrchestrator,
}

impl GifPickerApp {
    pub fn build(settings: PickerSettings, api_key: String) -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let search_provider = Arc::new(GiphySearchProvider::new(
            settings.search_endpoint.clone(),
            api_key,
            settings.rating.clone(),
        ));
        let image_fetcher = Arc::new(HttpImageFetcher::new());
        let draft_store = Arc::new(ComposerDraftStore::new());

        let composer = ComposerView::new(
            &settings.conversation_id,
            Arc::clone(&draft_store),
            settings.theme_mode,
        );

        let orchestrator = AppOrchestrator::build(
            settings,
            search_provider,
            image_fetcher,
            draft_store,
            composer,
        );

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, window_id: Id) -> String {
        self.orchestrator.window_title(window_id)
    }

    pub fn handle_subscription(&self) -> Subscription<OrchestratorMessage> {
        self.orchestrator.subscription()
    }
}
