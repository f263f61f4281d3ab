mod attachment_draft;
mod gif_result;
mod gif_service_error;
mod picker_settings;
mod preview_store;

pub use attachment_draft::{AttachmentDraft, IMAGE_GIF};
pub use gif_result::GifResult;
pub use gif_service_error::GifServiceError;
pub use picker_settings::{PickerSettings, ThemeMode};
pub use preview_store::{ObjectUrl, PreviewStore};
