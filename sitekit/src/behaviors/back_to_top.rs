use pagedom::{Document, Event, ScrollBehavior, Selector};

use super::{within_any, Behavior, Outcome};
use crate::config::BackToTopConfig;
use crate::error::Result;

/// Shows the back-to-top button once the page is scrolled past a threshold,
/// and smooth-scrolls to the top when it is clicked.
#[derive(Debug)]
pub struct BackToTop {
    selector: Selector,
    threshold: u32,
    visible_class: String,
}

impl BackToTop {
    pub fn new(config: &BackToTopConfig) -> Result<Self> {
        Ok(Self {
            selector: Selector::parse(&config.selector)?,
            threshold: config.threshold,
            visible_class: config.visible_class.clone(),
        })
    }
}

impl Behavior for BackToTop {
    fn name(&self) -> &'static str {
        "back-to-top"
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &Event) -> Result<Outcome> {
        let buttons = doc.query_all(&self.selector);
        if buttons.is_empty() {
            return Ok(Outcome::Ignored);
        }

        match event {
            Event::Scroll { y } => {
                let show = *y > self.threshold;
                for button in &buttons {
                    if show {
                        doc.add_class(button, &self.visible_class)?;
                    } else {
                        doc.remove_class(button, &self.visible_class)?;
                    }
                }
                Ok(Outcome::Handled)
            }
            Event::Click { target: Some(target) }
                if within_any(doc, &buttons, target).is_some() =>
            {
                doc.scroll_to_top(ScrollBehavior::Smooth);
                Ok(Outcome::PreventDefault)
            }
            _ => Ok(Outcome::Ignored),
        }
    }
}
