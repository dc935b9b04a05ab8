use std::fmt;

use pagedom::Element;

/// Tone of a page-level banner. Rendered as a `{class}--{kind}` modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page-level banner shown above a form.
///
/// Only one is visible at a time; showing a new one removes the old, and each
/// removes itself after the configured lifetime.
///
/// # Example
///
/// ```
/// use sitekit::{FormMessage, MessageKind};
///
/// let msg = FormMessage::error("Please fill in all required fields correctly.");
/// let el = msg.element("form-message");
/// assert!(el.has_class("form-message--error"));
/// assert_eq!(el.get_attr("role"), Some("alert"));
/// assert_eq!(FormMessage::from("Saved").kind, MessageKind::Info);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FormMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }

    /// Build the banner element, announced to assistive technology on insert.
    pub fn element(&self, class: &str) -> Element {
        Element::div()
            .class(class)
            .class(format!("{class}--{}", self.kind))
            .attr("role", "alert")
            .content(self.text.clone())
    }
}

impl From<String> for FormMessage {
    fn from(text: String) -> Self {
        FormMessage::info(text)
    }
}

impl From<&str> for FormMessage {
    fn from(text: &str) -> Self {
        FormMessage::info(text)
    }
}
