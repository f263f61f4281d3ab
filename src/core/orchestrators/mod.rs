pub mod app_orchestrator;
mod event_listeners;
mod pick_handler;
mod popup_controller;
mod search_sequencer;

pub use popup_controller::{ClickTarget, KeyChord, PopupHost};
pub use search_sequencer::{SearchSequencer, SearchStatus};
