#![allow(dead_code)]

pub const APPLICATION_TITLE: &str = "Composer";
pub const PICKER_WINDOW_TITLE: &str = "GIFs";

pub const HOTKEY_TOGGLE_PICKER: &str = "Ctrl/Cmd+Shift+S";
pub const HOTKEY_CANCEL: &str = "Escape";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_POPUP: &str = "[POPUP]";
pub const LOG_TAG_SEARCH: &str = "[SEARCH]";
pub const LOG_TAG_PICK: &str = "[PICK]";
pub const LOG_TAG_GIPHY: &str = "[GIPHY]";
pub const LOG_TAG_PREVIEWS: &str = "[PREVIEWS]";
pub const LOG_TAG_SHORTCUT: &str = "[SHORTCUT]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_DRAFTS: &str = "[DRAFTS]";

pub const GIPHY_API_KEY_ENV: &str = "GIPHY_API_KEY";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.giphy.com/v1/gifs/search";
pub const DEFAULT_RATING: &str = "pg";
pub const DEFAULT_QUERY: &str = "dogs";
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_CONVERSATION_ID: &str = "conv-1";

pub const PICKER_HEADER_BUTTON_CLASS: &str = "module-sticker-picker__header__button";
pub const OBJECT_URL_PREFIX: &str = "blob:gif-picker/";

pub const HEADER_QUICK_QUERIES: [&str; 4] = ["dogs", "cats", "reactions", "celebrate"];
pub const GRID_COLUMNS: usize = 4;
pub const THUMBNAIL_SIZE: f32 = 120.0;

pub const USER_MESSAGE_SERVICE_UNAVAILABLE: &str = "GIF service unavailable";
pub const USER_MESSAGE_NOT_CONFIGURED: &str = "GIF search is not configured";
pub const USER_MESSAGE_LOADING: &str = "Loading...";
pub const USER_MESSAGE_NO_RESULTS: &str = "No GIFs found";

pub const SETTINGS_DIR_NAME: &str = "gif-picker";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
