use crate::element::{find_element, find_element_mut, find_parent, walk, Element};
use crate::error::DomError;
use crate::selector::Selector;

/// How a programmatic scroll should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// The rendering surface page behaviors operate on.
///
/// Implementors provide the root element, focus and scroll primitives; every
/// other operation has a default built on those. [`crate::Tree`] is the
/// in-memory implementation.
pub trait Document {
    fn root(&self) -> &Element;
    fn root_mut(&mut self) -> &mut Element;

    /// ID of the element holding input focus.
    fn focused(&self) -> Option<&str>;
    /// Move focus to an existing element. Returns true if focus changed.
    fn focus(&mut self, id: &str) -> Result<bool, DomError>;

    fn scroll_y(&self) -> u32;
    /// Record a user-driven scroll position.
    fn set_scroll_y(&mut self, y: u32);
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    // Lookup

    fn element(&self, id: &str) -> Option<&Element> {
        find_element(self.root(), id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(self.root_mut(), id)
    }

    fn parent_of(&self, id: &str) -> Option<&Element> {
        find_parent(self.root(), id)
    }

    /// IDs of every element matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<String> {
        let mut ids = Vec::new();
        walk(self.root(), &mut |el| {
            if selector.matches(el) {
                ids.push(el.id.clone());
            }
        });
        ids
    }

    fn query_first(&self, selector: &Selector) -> Option<String> {
        self.query_all(selector).into_iter().next()
    }

    /// Like [`Document::query_all`], restricted to descendants of `scope`.
    fn query_all_within(&self, scope: &str, selector: &Selector) -> Result<Vec<String>, DomError> {
        let scope_el = self
            .element(scope)
            .ok_or_else(|| DomError::NotFound(scope.to_string()))?;
        let mut ids = Vec::new();
        for child in &scope_el.children {
            walk(child, &mut |el| {
                if selector.matches(el) {
                    ids.push(el.id.clone());
                }
            });
        }
        Ok(ids)
    }

    /// True if `id` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &str, id: &str) -> bool {
        self.element(ancestor)
            .is_some_and(|el| find_element(el, id).is_some())
    }

    // Class list

    fn add_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(require_mut(self, id)?.add_class(class))
    }

    fn remove_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(require_mut(self, id)?.remove_class(class))
    }

    fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(require_mut(self, id)?.toggle_class(class))
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    // Attributes and content

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), DomError> {
        require_mut(self, id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, id: &str, name: &str) -> Result<Option<String>, DomError> {
        Ok(require_mut(self, id)?.attributes.remove(name))
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError> {
        require_mut(self, id)?.text = text.to_string();
        Ok(())
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), DomError> {
        require_mut(self, id)?.value = value.to_string();
        Ok(())
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<(), DomError> {
        require_mut(self, id)?.disabled = disabled;
        Ok(())
    }

    // Structure

    /// Append `child` as the last child of `parent`. Returns the child's ID.
    fn append_child(&mut self, parent: &str, child: Element) -> Result<String, DomError> {
        let id = child.id.clone();
        require_mut(self, parent)?.children.push(child);
        Ok(id)
    }

    /// Insert `node` as the sibling immediately before `reference`.
    fn insert_before(&mut self, reference: &str, node: Element) -> Result<String, DomError> {
        if self.root().id == reference {
            return Err(DomError::NoParent(reference.to_string()));
        }
        let parent = crate::element::find_parent_mut(self.root_mut(), reference)
            .ok_or_else(|| DomError::NotFound(reference.to_string()))?;
        let pos = parent
            .children
            .iter()
            .position(|c| c.id == reference)
            .ok_or_else(|| DomError::NotFound(reference.to_string()))?;
        let id = node.id.clone();
        parent.children.insert(pos, node);
        Ok(id)
    }

    /// Detach an element. Removing an element that is not in the document is
    /// a no-op and returns `None`.
    fn remove(&mut self, id: &str) -> Option<Element> {
        if self.root().id == id {
            log::warn!("[document] refusing to remove root {id}");
            return None;
        }
        crate::element::remove_element(self.root_mut(), id)
    }
}

fn require_mut<'a, D: Document + ?Sized>(doc: &'a mut D, id: &str) -> Result<&'a mut Element, DomError> {
    doc.element_mut(id)
        .ok_or_else(|| DomError::NotFound(id.to_string()))
}
