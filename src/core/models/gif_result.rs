/// One hit from the GIF search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifResult {
    pub id: String,
    pub title: String,
    pub preview_url: String,
    pub original_url: String,
    /// Byte size of the original rendition as reported by the API.
    pub original_size: u64,
    pub width: u32,
    pub height: u32,
}

impl GifResult {
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_result(title: &str) -> GifResult {
        GifResult {
            id: "abc123".to_string(),
            title: title.to_string(),
            preview_url: "https://media.giphy.com/preview.gif".to_string(),
            original_url: "https://media.giphy.com/original.gif".to_string(),
            original_size: 2048,
            width: 480,
            height: 270,
        }
    }

    #[test]
    fn test_display_title_falls_back_to_id_when_blank() {
        assert_eq!(create_result("   ").display_title(), "abc123");
    }

    #[test]
    fn test_display_title_uses_title_when_present() {
        assert_eq!(create_result("Happy Dog").display_title(), "Happy Dog");
    }
}
