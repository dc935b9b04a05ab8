use pagedom::{Document, DomError, Element, FocusState, ScrollBehavior, Selector, Tree};

fn contact_page() -> Tree {
    Tree::with_body([Element::div().id("container").child(
        Element::form()
            .id("contact")
            .child(
                Element::div()
                    .id("group-name")
                    .class("form-group")
                    .child(Element::input("text").id("name").required()),
            )
            .child(
                Element::div()
                    .id("group-email")
                    .class("form-group")
                    .child(Element::input("email").id("email").required()),
            )
            .child(Element::textarea().id("notes"))
            .child(Element::button("Send").id("send").attr("type", "submit")),
    )])
}

fn sel(s: &str) -> Selector {
    Selector::parse(s).unwrap()
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_element_lookup() {
    let doc = contact_page();
    assert_eq!(doc.element("email").map(|e| e.tag.as_str()), Some("input"));
    assert!(doc.element("missing").is_none());
    assert_eq!(doc.parent_of("email").map(|e| e.id.as_str()), Some("group-email"));
    assert!(doc.parent_of("body").is_none());
}

#[test]
fn test_query_all_document_order() {
    let doc = contact_page();
    assert_eq!(doc.query_all(&sel("[required]")), vec!["name", "email"]);
    assert_eq!(
        doc.query_all(&sel("input, textarea")),
        vec!["name", "email", "notes"]
    );
    assert_eq!(doc.query_first(&sel("button[type=submit]")), Some("send".to_string()));
}

#[test]
fn test_query_within_excludes_scope() {
    let doc = contact_page();
    assert_eq!(
        doc.query_all_within("contact", &sel("form, [required]")).unwrap(),
        vec!["name", "email"]
    );
    assert_eq!(
        doc.query_all_within("nope", &sel("input")),
        Err(DomError::NotFound("nope".to_string()))
    );
}

#[test]
fn test_contains() {
    let doc = contact_page();
    assert!(doc.contains("contact", "email"));
    assert!(doc.contains("email", "email"));
    assert!(!doc.contains("group-name", "email"));
    assert!(!doc.contains("missing", "email"));
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_class_mutation() {
    let mut doc = contact_page();
    assert_eq!(doc.add_class("name", "error"), Ok(true));
    assert_eq!(doc.add_class("name", "error"), Ok(false));
    assert!(doc.has_class("name", "error"));
    assert_eq!(doc.remove_class("name", "error"), Ok(true));
    assert_eq!(doc.remove_class("name", "error"), Ok(false));
    assert_eq!(doc.toggle_class("name", "open"), Ok(true));
    assert_eq!(doc.toggle_class("name", "open"), Ok(false));
    assert_eq!(
        doc.add_class("missing", "error"),
        Err(DomError::NotFound("missing".to_string()))
    );
}

#[test]
fn test_attributes_and_content() {
    let mut doc = contact_page();
    doc.set_attribute("send", "aria-busy", "true").unwrap();
    assert_eq!(doc.element("send").unwrap().get_attr("aria-busy"), Some("true"));
    assert_eq!(
        doc.remove_attribute("send", "aria-busy").unwrap(),
        Some("true".to_string())
    );
    doc.set_text("send", "Sending...").unwrap();
    doc.set_disabled("send", true).unwrap();
    doc.set_value("name", "  Ada ").unwrap();

    let send = doc.element("send").unwrap();
    assert_eq!(send.text, "Sending...");
    assert!(send.disabled);
    assert_eq!(doc.element("name").unwrap().value, "  Ada ");
}

#[test]
fn test_append_and_insert_before() {
    let mut doc = contact_page();
    doc.append_child("group-name", Element::div().id("name-error"))
        .unwrap();
    let group = doc.element("group-name").unwrap();
    assert_eq!(group.children.last().map(|c| c.id.as_str()), Some("name-error"));

    doc.insert_before("contact", Element::div().id("banner")).unwrap();
    let container = doc.element("container").unwrap();
    let ids: Vec<_> = container.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["banner", "contact"]);

    assert_eq!(
        doc.insert_before("body", Element::div()),
        Err(DomError::NoParent("body".to_string()))
    );
}

#[test]
fn test_remove_missing_is_noop() {
    let mut doc = contact_page();
    assert!(doc.remove("notes").is_some());
    assert!(doc.remove("notes").is_none());
    assert!(doc.remove("body").is_none());
    assert!(doc.element("body").is_some());
}

// ============================================================================
// Focus & Scroll
// ============================================================================

#[test]
fn test_focus_state() {
    let mut state = FocusState::new();
    assert_eq!(state.focused(), None);
    assert!(state.focus("a"));
    assert!(!state.focus("a"));
    assert!(state.blur());
    assert!(!state.blur());
}

#[test]
fn test_tree_focus_requires_element() {
    let mut doc = contact_page();
    assert_eq!(doc.focus("email"), Ok(true));
    assert_eq!(doc.focused(), Some("email"));
    assert_eq!(
        doc.focus("missing"),
        Err(DomError::NotFound("missing".to_string()))
    );
    assert_eq!(doc.focused(), Some("email"));
}

#[test]
fn test_removing_focused_subtree_clears_focus() {
    let mut doc = contact_page();
    doc.focus("email").unwrap();
    doc.remove("group-email");
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_scroll() {
    let mut doc = contact_page();
    doc.set_scroll_y(640);
    assert_eq!(doc.scroll_y(), 640);
    assert_eq!(doc.last_scroll(), None);
    doc.scroll_to_top(ScrollBehavior::Smooth);
    assert_eq!(doc.scroll_y(), 0);
    assert_eq!(doc.last_scroll(), Some(ScrollBehavior::Smooth));
}
