mod node;

pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.children
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// Find the direct parent of the element with the given ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.children.iter().any(|child| child.id == id) {
        return Some(root);
    }

    root.children.iter().find_map(|child| find_parent(child, id))
}

pub(crate) fn find_parent_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.children.iter().any(|child| child.id == id) {
        return Some(root);
    }

    root.children
        .iter_mut()
        .find_map(|child| find_parent_mut(child, id))
}

/// Detach the element with the given ID from the tree.
/// The root itself is never removed; use the owning document for that check.
pub(crate) fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    if let Some(pos) = root.children.iter().position(|child| child.id == id) {
        return Some(root.children.remove(pos));
    }

    root.children
        .iter_mut()
        .find_map(|child| remove_element(child, id))
}

/// Visit every element in document order (pre-order, depth first).
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    for child in &root.children {
        walk(child, visit);
    }
}
