//! Site configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock behavior. Partial files only override what they name.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub validation: ValidationConfig,
    pub messages: MessageConfig,
    pub back_to_top: BackToTopConfig,
    pub menu: MenuConfig,
    pub focus_visible: FocusVisibleConfig,
    pub lazy_images: LazyImagesConfig,
    pub skip_link: SkipLinkConfig,
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::debug!("[config] loaded {}", path.display());
        Ok(config)
    }
}

/// Messages and markers used by form validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub form_selector: String,
    pub field_selector: String,
    pub submit_selector: String,
    pub required_message: String,
    pub email_message: String,
    pub date_message: String,
    pub blocked_message: String,
    /// Class projected onto a field while it is invalid.
    pub invalid_class: String,
    /// Class of the inline annotation under an invalid field.
    pub error_class: String,
    pub sending_label: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            form_selector: "form".to_string(),
            field_selector: "[required]".to_string(),
            submit_selector: "button[type=submit]".to_string(),
            required_message: "This field is required".to_string(),
            email_message: "Please enter a valid email address".to_string(),
            date_message: "Please select a future date".to_string(),
            blocked_message: "Please fill in all required fields correctly.".to_string(),
            invalid_class: "error".to_string(),
            error_class: "error-message".to_string(),
            sending_label: "Sending...".to_string(),
        }
    }
}

/// Page-level banner settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub class: String,
    pub lifetime_ms: u64,
}

impl MessageConfig {
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            class: "form-message".to_string(),
            lifetime_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    pub selector: String,
    /// Scroll offset past which the button is shown.
    pub threshold: u32,
    pub visible_class: String,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            selector: "#back-to-top".to_string(),
            threshold: 300,
            visible_class: "visible".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub active_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".menu-toggle".to_string(),
            menu_selector: ".nav-menu".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FocusVisibleConfig {
    pub class: String,
}

impl Default for FocusVisibleConfig {
    fn default() -> Self {
        Self {
            class: "keyboard-nav".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LazyImagesConfig {
    pub selector: String,
    pub pending_class: String,
    pub loaded_class: String,
}

impl Default for LazyImagesConfig {
    fn default() -> Self {
        Self {
            selector: "img[data-src]".to_string(),
            pending_class: "lazy".to_string(),
            loaded_class: "loaded".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkipLinkConfig {
    pub selector: String,
    /// Focus target when a skip link has no usable `href`.
    pub fallback_target: String,
}

impl Default for SkipLinkConfig {
    fn default() -> Self {
        Self {
            selector: ".skip-link".to_string(),
            fallback_target: "main".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = SiteConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.messages.lifetime(), Duration::from_millis(5000));
    }

    #[test]
    fn partial_override() {
        let config = SiteConfig::from_json_str(
            r#"{ "validation": { "sending_label": "Wird gesendet..." }, "back_to_top": { "threshold": 120 } }"#,
        )
        .unwrap();
        assert_eq!(config.validation.sending_label, "Wird gesendet...");
        assert_eq!(config.validation.required_message, "This field is required");
        assert_eq!(config.back_to_top.threshold, 120);
        assert_eq!(config.back_to_top.selector, "#back-to-top");
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            SiteConfig::from_json_str("{ nope"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SiteConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
