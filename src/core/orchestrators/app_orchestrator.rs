use std::sync::Arc;

use iced::task;
use iced::widget::text;
use iced::window::{self, Id};
use iced::{Element, Size, Subscription, Task};

use super::event_listeners::ListenerKind;
use super::pick_handler::{deliver_attachment, download_attachment};
use super::popup_controller::{PopupController, ShortcutOutcome};
use super::search_sequencer::{fetch_batch, BatchOutcome, LoadedGif, SearchSequencer, SearchTicket};
use crate::core::interfaces::adapters::{AttachmentSink, GifImageFetcher, GifSearchProvider};
use crate::core::models::{AttachmentDraft, GifServiceError, PickerSettings};
use crate::global_constants;
use crate::ports::{classify_click, DocumentEvent, DocumentListener, PopupWindowHost};
use crate::presentation::{ComposerMessage, ComposerView, GifPickerMessage, GifPickerView};

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    Composer(ComposerMessage),
    Picker(GifPickerMessage),
    Document(DocumentEvent),
    DebounceElapsed(SearchTicket),
    BatchLoaded(u64, Result<Vec<LoadedGif>, GifServiceError>),
    PickCompleted(Result<AttachmentDraft, GifServiceError>),
    WindowClosed(Id),
}

pub struct AppOrchestrator {
    settings: PickerSettings,
    search_provider: Arc<dyn GifSearchProvider>,
    image_fetcher: Arc<dyn GifImageFetcher>,
    attachment_sink: Arc<dyn AttachmentSink>,
    popup: PopupController<PopupWindowHost>,
    sequencer: SearchSequencer,
    picker_view: GifPickerView,
    composer: ComposerView,
    main_window_id: Option<Id>,
    search_task: Option<task::Handle>,
}

impl AppOrchestrator {
    pub fn build(
        settings: PickerSettings,
        search_provider: Arc<dyn GifSearchProvider>,
        image_fetcher: Arc<dyn GifImageFetcher>,
        attachment_sink: Arc<dyn AttachmentSink>,
        composer: ComposerView,
    ) -> Self {
        Self {
            sequencer: SearchSequencer::new(settings.debounce_window()),
            picker_view: GifPickerView::new(&settings.default_query, settings.theme_mode),
            popup: PopupController::new(PopupWindowHost::new()),
            settings,
            search_provider,
            image_fetcher,
            attachment_sink,
            composer,
            main_window_id: None,
            search_task: None,
        }
    }

    pub fn is_picker_open(&self) -> bool {
        self.popup.is_open()
    }

    pub fn sequencer(&self) -> &SearchSequencer {
        &self.sequencer
    }

    pub fn composer(&self) -> &ComposerView {
        &self.composer
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        let task = self.dispatch(message);
        let window_tasks = self.popup.host_mut().take_tasks().discard();

        Task::batch(vec![task, window_tasks])
    }

    fn dispatch(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::Composer(ComposerMessage::TriggerPressed) => {
                self.handle_trigger_pressed()
            }
            OrchestratorMessage::Composer(composer_msg) => {
                self.composer.update(composer_msg);
                Task::none()
            }
            OrchestratorMessage::Picker(picker_msg) => self.handle_picker_message(picker_msg),
            OrchestratorMessage::Document(event) => self.handle_document_event(event),
            OrchestratorMessage::DebounceElapsed(ticket) => self.handle_debounce_elapsed(ticket),
            OrchestratorMessage::BatchLoaded(generation, batch) => {
                self.handle_batch_loaded(generation, batch)
            }
            OrchestratorMessage::PickCompleted(result) => self.handle_pick_completed(result),
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        if self.popup.root() == Some(&window_id) {
            return self
                .picker_view
                .render_ui(&self.sequencer)
                .map(OrchestratorMessage::Picker);
        }

        if self.main_window_id == Some(window_id) {
            return self
                .composer
                .render_ui(self.popup.is_open())
                .map(OrchestratorMessage::Composer);
        }

        text("Loading...").into()
    }

    pub fn window_title(&self, window_id: Id) -> String {
        if self.popup.root() == Some(&window_id) {
            global_constants::PICKER_WINDOW_TITLE.to_string()
        } else {
            global_constants::APPLICATION_TITLE.to_string()
        }
    }

    pub fn subscription(&self) -> Subscription<OrchestratorMessage> {
        let mut subscriptions = vec![iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(OrchestratorMessage::WindowClosed(id));
            }
            None
        })];

        let listeners = self.popup.listeners();
        if listeners.is_active(ListenerKind::Keydown) {
            subscriptions
                .push(DocumentListener::keydown_events().map(OrchestratorMessage::Document));
        }
        if listeners.is_active(ListenerKind::OutsideClick) {
            subscriptions.push(DocumentListener::click_events().map(OrchestratorMessage::Document));
        }

        Subscription::batch(subscriptions)
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Main window already exists");
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(720.0, 560.0),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("[ORCHESTRATOR] Composer window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_trigger_pressed(&mut self) -> Task<OrchestratorMessage> {
        if self.popup.toggle() {
            self.after_open()
        } else {
            self.after_close();
            Task::none()
        }
    }

    fn handle_picker_message(&mut self, message: GifPickerMessage) -> Task<OrchestratorMessage> {
        match message {
            GifPickerMessage::QueryChanged(query) => self.handle_query_changed(&query),
            GifPickerMessage::QuickQuery(query) => self.handle_query_changed(query),
            GifPickerMessage::GifPicked(index) => self.handle_gif_picked(index),
            GifPickerMessage::CloseRequested => {
                if self.popup.close() {
                    self.after_close();
                }
                Task::none()
            }
        }
    }

    fn handle_document_event(&mut self, event: DocumentEvent) -> Task<OrchestratorMessage> {
        match event {
            DocumentEvent::KeyPressed(chord) => {
                match self
                    .popup
                    .handle_keydown(&chord, self.composer.open_panel_count())
                {
                    ShortcutOutcome::Toggled { is_open: true } => self.after_open(),
                    ShortcutOutcome::Toggled { is_open: false } => {
                        self.after_close();
                        Task::none()
                    }
                    ShortcutOutcome::Ignored | ShortcutOutcome::SuppressedByPanels => Task::none(),
                }
            }
            DocumentEvent::EscapePressed => {
                if self.popup.handle_escape() {
                    self.after_close();
                }
                Task::none()
            }
            DocumentEvent::PointerPressed(window_id) => {
                let target = classify_click(
                    window_id,
                    self.popup.root().copied(),
                    self.composer.is_trigger_hovered(),
                );
                if self.popup.handle_outside_click(&target) {
                    self.after_close();
                }
                Task::none()
            }
        }
    }

    fn handle_query_changed(&mut self, query: &str) -> Task<OrchestratorMessage> {
        if !self.picker_view.set_query(query) || !self.popup.is_open() {
            return Task::none();
        }
        self.schedule_search()
    }

    fn schedule_search(&mut self) -> Task<OrchestratorMessage> {
        let ticket = self.sequencer.schedule(self.picker_view.query());
        let debounce_window = self.sequencer.debounce_window();

        Task::future(async move {
            tokio::time::sleep(debounce_window).await;
            OrchestratorMessage::DebounceElapsed(ticket)
        })
    }

    fn handle_debounce_elapsed(&mut self, ticket: SearchTicket) -> Task<OrchestratorMessage> {
        if !self.popup.is_open() || !self.sequencer.begin(&ticket) {
            return Task::none();
        }

        self.abort_search_task();

        let generation = ticket.generation;
        let search_provider = Arc::clone(&self.search_provider);
        let image_fetcher = Arc::clone(&self.image_fetcher);

        let (task, handle) = Task::future(fetch_batch(ticket.query, search_provider, image_fetcher))
            .map(move |batch| OrchestratorMessage::BatchLoaded(generation, batch))
            .abortable();
        self.search_task = Some(handle);
        task
    }

    fn handle_batch_loaded(
        &mut self,
        generation: u64,
        batch: Result<Vec<LoadedGif>, GifServiceError>,
    ) -> Task<OrchestratorMessage> {
        match self.sequencer.complete(generation, batch) {
            BatchOutcome::Applied(count) => {
                log::info!("[ORCHESTRATOR] Showing {} GIFs", count);
                self.search_task = None;
            }
            BatchOutcome::Failed(error) => {
                log::error!("[ORCHESTRATOR] GIF search failed: {}", error);
                self.search_task = None;
            }
            BatchOutcome::Stale => {}
        }
        Task::none()
    }

    fn handle_gif_picked(&mut self, index: usize) -> Task<OrchestratorMessage> {
        let Some(result) = self.sequencer.result_at(index).cloned() else {
            log::warn!("[ORCHESTRATOR] No GIF at index {}", index);
            return Task::none();
        };

        log::info!("[ORCHESTRATOR] GIF {} picked, closing popup", result.id);
        if self.popup.close() {
            self.after_close();
        }

        let image_fetcher = Arc::clone(&self.image_fetcher);
        Task::future(download_attachment(image_fetcher, result)).map(OrchestratorMessage::PickCompleted)
    }

    fn handle_pick_completed(
        &mut self,
        result: Result<AttachmentDraft, GifServiceError>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(draft) => {
                deliver_attachment(
                    self.attachment_sink.as_ref(),
                    &self.settings.conversation_id,
                    draft,
                );
                self.composer.set_status(None);
            }
            Err(error) => {
                log::error!("[ORCHESTRATOR] Failed to attach GIF: {}", error);
                self.composer
                    .set_status(Some(error.user_message().to_string()));
            }
        }
        Task::none()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        if self.popup.root() == Some(&id) {
            log::info!("[ORCHESTRATOR] Picker window closed by the window manager");
            if self.popup.close() {
                self.after_close();
            }
            return Task::none();
        }

        if self.main_window_id == Some(id) {
            log::info!("[ORCHESTRATOR] Composer window closed, exiting");
            self.main_window_id = None;
            if self.popup.close() {
                self.after_close();
            }
            return iced::exit();
        }

        Task::none()
    }

    fn after_open(&mut self) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Picker opened, scheduling initial search");
        self.schedule_search()
    }

    fn after_close(&mut self) {
        self.abort_search_task();
        self.sequencer.cancel();
    }

    fn abort_search_task(&mut self) {
        if let Some(handle) = self.search_task.take() {
            log::debug!("[ORCHESTRATOR] Aborting in-flight search");
            handle.abort();
        }
    }
}
