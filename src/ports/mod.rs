mod keyboard_listener;
mod popup_window_host;

pub use keyboard_listener::{classify_click, DocumentEvent, DocumentListener};
pub use popup_window_host::PopupWindowHost;
