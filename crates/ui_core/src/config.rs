//! Client configuration.

/// Configuration for the generator/list controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL (default: "" for same origin)
    pub base_url: String,
    /// Smallest selectable password length (default: 4)
    pub min_length: u32,
    /// Largest selectable password length (default: 64)
    pub max_length: u32,
    /// Initial slider position (default: 12)
    pub default_length: u32,
    /// How long the copy button shows its check mark (default: 2000)
    pub copy_feedback_ms: u32,
    /// Delay before reclassifying the device after a resize (default: 250)
    pub resize_debounce_ms: u32,
    /// Delay before handling an orientation change (default: 100)
    pub orientation_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            min_length: 4,
            max_length: 64,
            default_length: 12,
            copy_feedback_ms: 2000,
            resize_debounce_ms: 250,
            orientation_delay_ms: 100,
        }
    }
}

impl ClientConfig {
    /// Default configuration talking to the given backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Absolute URL for an API path such as `/saved`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Clamp a requested length into the slider bounds.
    pub fn clamp_length(&self, length: u32) -> u32 {
        length.clamp(self.min_length, self.max_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ClientConfig::default();

        assert_eq!(config.endpoint("/saved"), "/saved");
        assert_eq!(config.default_length, 12);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ClientConfig::with_base_url("http://localhost:5000/");

        assert_eq!(config.endpoint("/delete/3"), "http://localhost:5000/delete/3");
    }

    #[test]
    fn test_clamp_length() {
        let config = ClientConfig::default();

        assert_eq!(config.clamp_length(1), 4);
        assert_eq!(config.clamp_length(20), 20);
        assert_eq!(config.clamp_length(500), 64);
    }
}
