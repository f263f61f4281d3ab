pub mod app_theme;
mod composer_view;
mod gif_picker_view;

pub use composer_view::{ComposerMessage, ComposerView, ConversationPanel};
pub use gif_picker_view::{GifPickerMessage, GifPickerView};
