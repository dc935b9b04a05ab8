use pagedom::{Document, Event, Key};

use super::{Behavior, Outcome};
use crate::config::FocusVisibleConfig;
use crate::error::Result;

/// Adds a class to the root while the user navigates with Tab, and drops it on
/// the next mouse press, so focus rings only show for keyboard users.
#[derive(Debug)]
pub struct FocusVisible {
    class: String,
}

impl FocusVisible {
    pub fn new(config: &FocusVisibleConfig) -> Self {
        Self {
            class: config.class.clone(),
        }
    }
}

impl Behavior for FocusVisible {
    fn name(&self) -> &'static str {
        "focus-visible"
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &Event) -> Result<Outcome> {
        let root = doc.root().id.clone();
        match event {
            Event::Key {
                key: Key::Tab | Key::BackTab,
                ..
            } => {
                doc.add_class(&root, &self.class)?;
                Ok(Outcome::Handled)
            }
            Event::MouseDown { .. } => {
                doc.remove_class(&root, &self.class)?;
                Ok(Outcome::Handled)
            }
            _ => Ok(Outcome::Ignored),
        }
    }
}
