use thiserror::Error;

use crate::global_constants;

/// Every way the picker can fail talking to the GIF service.
///
/// Carried inside iced messages, so variants hold rendered strings rather than
/// source errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GifServiceError {
    #[error("search request failed: {0}")]
    Search(String),

    #[error("preview download failed: {0}")]
    Preview(String),

    #[error("gif download failed: {0}")]
    Download(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no GIPHY api key configured; set {env} or api_key in {0}", env = global_constants::GIPHY_API_KEY_ENV)]
    MissingApiKey(String),
}

impl GifServiceError {
    /// Search failures whose cause chain contains a JSON error are reported as malformed.
    pub fn from_search_failure(error: &anyhow::Error) -> Self {
        if Self::is_json_failure(error) {
            GifServiceError::MalformedResponse(format!("{:#}", error))
        } else {
            GifServiceError::Search(format!("{:#}", error))
        }
    }

    pub fn from_preview_failure(error: &anyhow::Error) -> Self {
        GifServiceError::Preview(format!("{:#}", error))
    }

    pub fn from_download_failure(error: &anyhow::Error) -> Self {
        GifServiceError::Download(format!("{:#}", error))
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            GifServiceError::MissingApiKey(_) => global_constants::USER_MESSAGE_NOT_CONFIGURED,
            _ => global_constants::USER_MESSAGE_SERVICE_UNAVAILABLE,
        }
    }

    fn is_json_failure(error: &anyhow::Error) -> bool {
        error
            .chain()
            .any(|cause| cause.downcast_ref::<serde_json::Error>().is_some())
    }
}
