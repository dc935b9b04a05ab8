use crate::document::{Document, ScrollBehavior};
use crate::element::Element;
use crate::error::DomError;
use crate::focus::FocusState;

/// In-memory [`Document`] rooted at a `<body>` element.
#[derive(Debug, Clone)]
pub struct Tree {
    root: Element,
    focus: FocusState,
    scroll_y: u32,
    last_scroll: Option<ScrollBehavior>,
}

impl Tree {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
            scroll_y: 0,
            last_scroll: None,
        }
    }

    /// Build a document whose root is `<body id="body">` holding `children`.
    pub fn with_body(children: impl IntoIterator<Item = Element>) -> Self {
        Self::new(Element::new("body").id("body").children(children))
    }

    /// Behavior of the most recent programmatic scroll, if any.
    pub fn last_scroll(&self) -> Option<ScrollBehavior> {
        self.last_scroll
    }
}

impl Document for Tree {
    fn root(&self) -> &Element {
        &self.root
    }

    fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    fn focus(&mut self, id: &str) -> Result<bool, DomError> {
        if self.element(id).is_none() {
            return Err(DomError::NotFound(id.to_string()));
        }
        Ok(self.focus.focus(id))
    }

    fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    fn set_scroll_y(&mut self, y: u32) {
        self.scroll_y = y;
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        log::trace!("[tree] scroll to top ({behavior:?}) from {}", self.scroll_y);
        self.scroll_y = 0;
        self.last_scroll = Some(behavior);
    }

    fn remove(&mut self, id: &str) -> Option<Element> {
        if self.root.id == id {
            log::warn!("[tree] refusing to remove root {id}");
            return None;
        }
        let removed = crate::element::remove_element(&mut self.root, id)?;
        if let Some(focused) = self.focus.focused().map(str::to_string) {
            if crate::element::find_element(&removed, &focused).is_some() {
                self.focus.forget(&focused);
            }
        }
        Some(removed)
    }
}
