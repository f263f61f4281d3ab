use iced::event::{self, Event, Status};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::mouse;
use iced::window::Id;
use iced::Subscription;

use crate::core::orchestrators::{ClickTarget, KeyChord};

/// Document-level input forwarded to the orchestrator while a listener is registered.
#[derive(Debug, Clone)]
pub enum DocumentEvent {
    KeyPressed(KeyChord),
    EscapePressed,
    PointerPressed(Id),
}

pub struct DocumentListener;

impl DocumentListener {
    pub fn keydown_events() -> Subscription<DocumentEvent> {
        event::listen_with(Self::map_keyboard_event)
    }

    pub fn click_events() -> Subscription<DocumentEvent> {
        event::listen_with(Self::map_pointer_event)
    }

    fn map_keyboard_event(event: Event, _status: Status, _window: Id) -> Option<DocumentEvent> {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if key == Key::Named(Named::Escape) {
                    log::debug!("[SHORTCUT] Escape pressed");
                    return Some(DocumentEvent::EscapePressed);
                }
                chord_from_key(&key, modifiers).map(DocumentEvent::KeyPressed)
            }
            _ => None,
        }
    }

    fn map_pointer_event(event: Event, _status: Status, window: Id) -> Option<DocumentEvent> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(DocumentEvent::PointerPressed(window)),
            _ => None,
        }
    }
}

/// Only chords that carry a modifier are interesting to the picker.
pub fn chord_from_key(key: &Key, modifiers: Modifiers) -> Option<KeyChord> {
    if !modifiers.command() && !modifiers.shift() {
        return None;
    }

    match key {
        Key::Character(character) => Some(KeyChord::new(
            modifiers.command(),
            modifiers.shift(),
            character.as_str(),
        )),
        _ => None,
    }
}

/// Maps a raw press to a [`ClickTarget`]. Presses in the popup window are inside it.
/// Presses on the host window count as the trigger only while the pointer is over it.
pub fn classify_click(window: Id, popup_root: Option<Id>, trigger_hovered: bool) -> ClickTarget {
    if popup_root == Some(window) {
        return ClickTarget::inside_popup();
    }

    if trigger_hovered {
        return ClickTarget::trigger();
    }

    ClickTarget::outside()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_from_key_reads_command_shift_s() {
        let chord = chord_from_key(
            &Key::Character("S".into()),
            Modifiers::COMMAND | Modifiers::SHIFT,
        )
        .unwrap();

        assert!(chord.is_picker_shortcut());
    }

    #[test]
    fn test_chord_from_key_ignores_plain_typing() {
        assert!(chord_from_key(&Key::Character("s".into()), Modifiers::empty()).is_none());
    }

    #[test]
    fn test_chord_from_key_ignores_named_keys() {
        assert!(chord_from_key(&Key::Named(Named::Enter), Modifiers::COMMAND).is_none());
    }

    #[test]
    fn test_chord_without_shift_is_not_picker_shortcut() {
        let chord = chord_from_key(&Key::Character("s".into()), Modifiers::COMMAND).unwrap();

        assert!(!chord.is_picker_shortcut());
    }

    #[test]
    fn test_classify_click_in_popup_window_is_inside() {
        let popup = Id::unique();

        let target = classify_click(popup, Some(popup), false);

        assert!(target.inside_popup);
        assert!(!target.dismisses_popup());
    }

    #[test]
    fn test_classify_click_on_hovered_trigger() {
        let host = Id::unique();
        let popup = Id::unique();

        let target = classify_click(host, Some(popup), true);

        assert!(target.is_trigger);
        assert!(!target.dismisses_popup());
    }

    #[test]
    fn test_classify_click_elsewhere_in_host_dismisses() {
        let host = Id::unique();
        let popup = Id::unique();

        let target = classify_click(host, Some(popup), false);

        assert!(target.dismisses_popup());
    }
}
