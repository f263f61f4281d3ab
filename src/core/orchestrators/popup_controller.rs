use super::event_listeners::{EventListeners, ListenerHandle, ListenerKind};
use crate::global_constants;

/// Surface the popup root is mounted on.
pub trait PopupHost {
    type Root: Clone + PartialEq + std::fmt::Debug;

    fn mount_root(&mut self) -> Self::Root;
    fn unmount_root(&mut self, root: Self::Root);
}

/// Where a document click landed, relative to the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub inside_popup: bool,
    pub is_trigger: bool,
    pub class_names: Vec<String>,
}

impl ClickTarget {
    pub fn outside() -> Self {
        Self::default()
    }

    pub fn inside_popup() -> Self {
        Self {
            inside_popup: true,
            ..Self::default()
        }
    }

    pub fn trigger() -> Self {
        Self {
            is_trigger: true,
            ..Self::default()
        }
    }

    /// Header buttons can replace themselves on click, so they are matched by
    /// marker class instead of by containment.
    pub fn picker_header_button() -> Self {
        Self {
            class_names: vec![global_constants::PICKER_HEADER_BUTTON_CLASS.to_string()],
            ..Self::default()
        }
    }

    pub fn has_header_marker(&self) -> bool {
        self.class_names
            .iter()
            .any(|class| class.contains(global_constants::PICKER_HEADER_BUTTON_CLASS))
    }

    pub fn dismisses_popup(&self) -> bool {
        !self.inside_popup && !self.is_trigger && !self.has_header_marker()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    /// Cmd on macOS, Ctrl elsewhere.
    pub command: bool,
    pub shift: bool,
    pub key: String,
}

impl KeyChord {
    pub fn new(command: bool, shift: bool, key: impl Into<String>) -> Self {
        Self {
            command,
            shift,
            key: key.into(),
        }
    }

    pub fn is_picker_shortcut(&self) -> bool {
        self.command && self.shift && self.key.eq_ignore_ascii_case("s")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOutcome {
    Ignored,
    SuppressedByPanels,
    /// The event was consumed and must not propagate further.
    Toggled { is_open: bool },
}

struct PopupSession<R> {
    root: R,
    click_listener: ListenerHandle,
}

/// Open/closed state for one picker button.
///
/// While open, a session owns the mounted root and the outside-click listener.
/// Every close path goes through [`PopupController::close`], which releases both.
pub struct PopupController<H: PopupHost> {
    host: H,
    listeners: EventListeners,
    session: Option<PopupSession<H::Root>>,
    keydown_listener: Option<ListenerHandle>,
}

impl<H: PopupHost> PopupController<H> {
    pub fn new(host: H) -> Self {
        let mut listeners = EventListeners::new();
        let keydown_listener = Some(listeners.attach(ListenerKind::Keydown));

        Self {
            host,
            listeners,
            session: None,
            keydown_listener,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn root(&self) -> Option<&H::Root> {
        self.session.as_ref().map(|session| &session.root)
    }

    pub fn listeners(&self) -> &EventListeners {
        &self.listeners
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns `true` if this call opened the popup.
    pub fn open(&mut self) -> bool {
        if self.session.is_some() {
            log::debug!("[POPUP] Already open, ignoring open request");
            return false;
        }

        let root = self.host.mount_root();
        let click_listener = self.listeners.attach(ListenerKind::OutsideClick);
        log::info!("[POPUP] Opened with root {:?}", root);

        self.session = Some(PopupSession {
            root,
            click_listener,
        });
        self.rebind_keydown();
        true
    }

    /// Returns `true` if this call closed the popup.
    pub fn close(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };

        self.listeners.detach(session.click_listener);
        log::info!("[POPUP] Closing, unmounting root {:?}", session.root);
        self.host.unmount_root(session.root);
        self.rebind_keydown();
        true
    }

    /// Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.is_open()
    }

    /// Returns `true` if the click closed the popup.
    pub fn handle_outside_click(&mut self, target: &ClickTarget) -> bool {
        if !self.listeners.is_active(ListenerKind::OutsideClick) {
            return false;
        }

        if target.dismisses_popup() {
            log::debug!("[POPUP] Outside click detected, closing");
            self.close()
        } else {
            false
        }
    }

    pub fn handle_keydown(&mut self, chord: &KeyChord, open_panel_count: usize) -> ShortcutOutcome {
        if !self.listeners.is_active(ListenerKind::Keydown) {
            return ShortcutOutcome::Ignored;
        }

        if open_panel_count > 1 {
            log::debug!(
                "[SHORTCUT] {} panels open, shortcut suppressed",
                open_panel_count
            );
            return ShortcutOutcome::SuppressedByPanels;
        }

        if !chord.is_picker_shortcut() {
            return ShortcutOutcome::Ignored;
        }

        log::info!(
            "[SHORTCUT] {} detected",
            global_constants::HOTKEY_TOGGLE_PICKER
        );
        let is_open = self.toggle();
        ShortcutOutcome::Toggled { is_open }
    }

    pub fn handle_escape(&mut self) -> bool {
        self.close()
    }

    fn rebind_keydown(&mut self) {
        if let Some(previous) = self.keydown_listener.take() {
            self.listeners.detach(previous);
        }
        self.keydown_listener = Some(self.listeners.attach(ListenerKind::Keydown));
    }
}

impl<H: PopupHost> Drop for PopupController<H> {
    fn drop(&mut self) {
        self.close();
        if let Some(keydown) = self.keydown_listener.take() {
            self.listeners.detach(keydown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        next_root: u32,
        mounted: Vec<u32>,
        mount_calls: usize,
        unmount_calls: usize,
    }

    impl PopupHost for RecordingHost {
        type Root = u32;

        fn mount_root(&mut self) -> u32 {
            self.next_root += 1;
            self.mount_calls += 1;
            self.mounted.push(self.next_root);
            self.next_root
        }

        fn unmount_root(&mut self, root: u32) {
            self.unmount_calls += 1;
            self.mounted.retain(|r| *r != root);
        }
    }

    fn create_controller() -> PopupController<RecordingHost> {
        PopupController::new(RecordingHost::default())
    }

    fn shortcut() -> KeyChord {
        KeyChord::new(true, true, "S")
    }

    #[test]
    fn test_open_mounts_root_and_attaches_one_listener_of_each_kind() {
        let mut controller = create_controller();
        let attached_before = controller.listeners().total_attached();
        let detached_before = controller.listeners().total_detached();

        assert!(controller.open());

        assert!(controller.is_open());
        assert_eq!(controller.host().mounted, vec![1]);
        assert_eq!(controller.root(), Some(&1));
        assert_eq!(controller.listeners().total_attached() - attached_before, 2);
        assert_eq!(controller.listeners().total_detached() - detached_before, 1);
        assert_eq!(controller.listeners().active_count(ListenerKind::OutsideClick), 1);
        assert_eq!(controller.listeners().active_count(ListenerKind::Keydown), 1);
    }

    #[test]
    fn test_close_removes_exactly_what_open_attached() {
        let mut controller = create_controller();
        controller.open();
        let detached_before = controller.listeners().total_detached();

        assert!(controller.close());

        assert!(!controller.is_open());
        assert!(controller.host().mounted.is_empty());
        assert_eq!(controller.listeners().total_detached() - detached_before, 2);
        assert_eq!(controller.listeners().active_count(ListenerKind::OutsideClick), 0);
        assert_eq!(controller.listeners().active_count(ListenerKind::Keydown), 1);
    }

    #[test]
    fn test_open_twice_never_double_registers() {
        let mut controller = create_controller();

        assert!(controller.open());
        assert!(!controller.open());

        assert_eq!(controller.host().mount_calls, 1);
        assert_eq!(controller.listeners().active_count(ListenerKind::OutsideClick), 1);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut controller = create_controller();

        assert!(!controller.close());
        assert_eq!(controller.host().unmount_calls, 0);
    }

    #[test]
    fn test_toggle_alternates_state() {
        let mut controller = create_controller();

        assert!(controller.toggle());
        assert!(!controller.toggle());
        assert!(controller.toggle());
        assert_eq!(controller.host().mount_calls, 2);
        assert_eq!(controller.host().unmount_calls, 1);
    }

    #[test]
    fn test_outside_click_closes_popup() {
        let mut controller = create_controller();
        controller.open();

        assert!(controller.handle_outside_click(&ClickTarget::outside()));
        assert!(!controller.is_open());
        assert_eq!(controller.host().unmount_calls, 1);
    }

    #[test]
    fn test_clicks_inside_popup_on_trigger_or_header_keep_popup_open() {
        let mut controller = create_controller();
        controller.open();

        assert!(!controller.handle_outside_click(&ClickTarget::inside_popup()));
        assert!(!controller.handle_outside_click(&ClickTarget::trigger()));
        assert!(!controller.handle_outside_click(&ClickTarget::picker_header_button()));
        assert!(controller.is_open());
    }

    #[test]
    fn test_header_marker_matches_within_compound_class_names() {
        let target = ClickTarget {
            class_names: vec![
                "module-sticker-picker__header__button module-sticker-picker__header__button--selected"
                    .to_string(),
            ],
            ..ClickTarget::default()
        };

        assert!(!target.dismisses_popup());
    }

    #[test]
    fn test_outside_click_while_closed_does_nothing() {
        let mut controller = create_controller();

        assert!(!controller.handle_outside_click(&ClickTarget::outside()));
        assert_eq!(controller.host().unmount_calls, 0);
    }

    #[test]
    fn test_shortcut_toggles_popup() {
        let mut controller = create_controller();

        assert_eq!(
            controller.handle_keydown(&shortcut(), 0),
            ShortcutOutcome::Toggled { is_open: true }
        );
        assert_eq!(
            controller.handle_keydown(&KeyChord::new(true, true, "s"), 1),
            ShortcutOutcome::Toggled { is_open: false }
        );
    }

    #[test]
    fn test_shortcut_is_noop_with_multiple_panels_open_in_either_state() {
        let mut controller = create_controller();

        assert_eq!(
            controller.handle_keydown(&shortcut(), 2),
            ShortcutOutcome::SuppressedByPanels
        );
        assert!(!controller.is_open());

        controller.open();
        assert_eq!(
            controller.handle_keydown(&shortcut(), 3),
            ShortcutOutcome::SuppressedByPanels
        );
        assert!(controller.is_open());
    }

    #[test]
    fn test_other_chords_are_ignored() {
        let mut controller = create_controller();

        assert_eq!(
            controller.handle_keydown(&KeyChord::new(true, false, "s"), 0),
            ShortcutOutcome::Ignored
        );
        assert_eq!(
            controller.handle_keydown(&KeyChord::new(false, true, "s"), 0),
            ShortcutOutcome::Ignored
        );
        assert_eq!(
            controller.handle_keydown(&KeyChord::new(true, true, "d"), 0),
            ShortcutOutcome::Ignored
        );
        assert!(!controller.is_open());
    }

    #[test]
    fn test_escape_closes_open_popup() {
        let mut controller = create_controller();
        controller.open();

        assert!(controller.handle_escape());
        assert!(!controller.is_open());
        assert!(!controller.handle_escape());
    }
}
