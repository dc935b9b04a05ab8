/// Errors raised by document operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No element with the given id exists in the document.
    #[error("Element not found: {0}")]
    NotFound(String),

    /// The element has no parent to insert relative to.
    #[error("Element has no parent: {0}")]
    NoParent(String),

    /// The root element cannot be removed or replaced.
    #[error("Cannot remove the document root: {0}")]
    RootRemoval(String),

    /// A selector string could not be parsed.
    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        /// The selector as written.
        selector: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl DomError {
    pub(crate) fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}
