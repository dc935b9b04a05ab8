use pagedom::{Document, Event, Key, Selector};

use super::{within_any, Behavior, Outcome};
use crate::config::MenuConfig;
use crate::error::Result;

/// Mobile navigation drawer.
///
/// The open state lives in the document as the active class on the menu.
/// Clicking the toggle flips it; a click outside both the toggle and the menu,
/// a click on a link inside the menu, or Escape closes it. Escape also returns
/// focus to the toggle.
#[derive(Debug)]
pub struct MobileMenu {
    toggle: Selector,
    menu: Selector,
    active_class: String,
}

impl MobileMenu {
    pub fn new(config: &MenuConfig) -> Result<Self> {
        Ok(Self {
            toggle: Selector::parse(&config.toggle_selector)?,
            menu: Selector::parse(&config.menu_selector)?,
            active_class: config.active_class.clone(),
        })
    }

    fn is_open(&self, doc: &dyn Document, menus: &[String]) -> bool {
        menus.iter().any(|m| doc.has_class(m, &self.active_class))
    }

    fn set_open(
        &self,
        doc: &mut dyn Document,
        toggles: &[String],
        menus: &[String],
        open: bool,
    ) -> Result<()> {
        for id in toggles.iter().chain(menus) {
            if open {
                doc.add_class(id, &self.active_class)?;
            } else {
                doc.remove_class(id, &self.active_class)?;
            }
        }
        let expanded = if open { "true" } else { "false" };
        for toggle in toggles {
            doc.set_attribute(toggle, "aria-expanded", expanded)?;
        }
        log::debug!("[menu] {}", if open { "opened" } else { "closed" });
        Ok(())
    }

    fn clicked_link_in(&self, doc: &dyn Document, menu: &str, target: &str) -> bool {
        let Some(menu_el) = doc.element(menu) else {
            return false;
        };
        let mut hit = false;
        pagedom::element::walk(menu_el, &mut |el| {
            if el.tag == "a" && pagedom::element::find_element(el, target).is_some() {
                hit = true;
            }
        });
        hit
    }
}

impl Behavior for MobileMenu {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &Event) -> Result<Outcome> {
        let toggles = doc.query_all(&self.toggle);
        let menus = doc.query_all(&self.menu);
        if toggles.is_empty() || menus.is_empty() {
            return Ok(Outcome::Ignored);
        }
        let open = self.is_open(doc, &menus);

        match event {
            Event::Click { target: Some(target) }
                if within_any(doc, &toggles, target).is_some() =>
            {
                self.set_open(doc, &toggles, &menus, !open)?;
                Ok(Outcome::Handled)
            }
            Event::Click { target: Some(target) } if open => {
                match within_any(doc, &menus, target) {
                    Some(menu) if self.clicked_link_in(doc, &menu, target) => {
                        self.set_open(doc, &toggles, &menus, false)?;
                        Ok(Outcome::Handled)
                    }
                    Some(_) => Ok(Outcome::Ignored),
                    None => {
                        self.set_open(doc, &toggles, &menus, false)?;
                        Ok(Outcome::Handled)
                    }
                }
            }
            Event::Click { target: None } if open => {
                self.set_open(doc, &toggles, &menus, false)?;
                Ok(Outcome::Handled)
            }
            Event::Key {
                key: Key::Escape, ..
            } if open => {
                self.set_open(doc, &toggles, &menus, false)?;
                doc.focus(&toggles[0])?;
                Ok(Outcome::Handled)
            }
            _ => Ok(Outcome::Ignored),
        }
    }
}
