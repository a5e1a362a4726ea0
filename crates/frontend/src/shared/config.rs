//! Client settings for the chat page.

use crate::shared::api_utils::api_base;
use leptos::prelude::*;

/// Maximum height the message box may grow to, in pixels
pub const DEFAULT_INPUT_MAX_HEIGHT_PX: i32 = 120;

/// Delay before scrolling the transcript, so new bubbles are laid out first
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for endpoint URLs; empty means same origin
    pub api_base: String,
    pub input_max_height_px: i32,
    pub scroll_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            input_max_height_px: DEFAULT_INPUT_MAX_HEIGHT_PX,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Defaults with the API base taken from the page, if it overrides it
    pub fn load() -> Self {
        let config = Self {
            api_base: api_base(),
            ..Self::default()
        };
        if config.api_base.is_empty() {
            log::debug!("API base: same origin");
        } else {
            log::info!("API base: {}", config.api_base);
        }
        config
    }

    /// Height for the message box given its content height
    pub fn input_height(&self, scroll_height: i32) -> i32 {
        scroll_height.min(self.input_max_height_px)
    }
}

/// Hook to access the client config provided by `App`
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.input_max_height_px, 120);
        assert_eq!(config.scroll_delay_ms, 100);
    }

    #[test]
    fn test_input_height_is_capped() {
        let config = ClientConfig::default();
        assert_eq!(config.input_height(48), 48);
        assert_eq!(config.input_height(120), 120);
        assert_eq!(config.input_height(400), 120);
    }
}
