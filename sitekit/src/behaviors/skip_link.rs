use pagedom::{Document, Event, Selector};

use super::{within_any, Behavior, Outcome};
use crate::config::SkipLinkConfig;
use crate::error::Result;

/// Moves keyboard focus to the main content when a skip link is activated.
///
/// The target comes from the link's `#fragment` href. Targets that are not
/// naturally focusable get `tabindex="-1"` first.
#[derive(Debug)]
pub struct SkipLink {
    selector: Selector,
    fallback_target: String,
}

impl SkipLink {
    pub fn new(config: &SkipLinkConfig) -> Result<Self> {
        Ok(Self {
            selector: Selector::parse(&config.selector)?,
            fallback_target: config.fallback_target.clone(),
        })
    }
}

impl Behavior for SkipLink {
    fn name(&self) -> &'static str {
        "skip-link"
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &Event) -> Result<Outcome> {
        let Event::Click { target: Some(target) } = event else {
            return Ok(Outcome::Ignored);
        };
        let links = doc.query_all(&self.selector);
        let Some(link) = within_any(doc, &links, target) else {
            return Ok(Outcome::Ignored);
        };

        let destination = doc
            .element(&link)
            .and_then(|el| el.get_attr("href"))
            .and_then(|href| href.strip_prefix('#'))
            .filter(|id| !id.is_empty())
            .unwrap_or(self.fallback_target.as_str())
            .to_string();

        let Some(main) = doc.element(&destination) else {
            log::warn!("[skip-link] target #{destination} not found");
            return Ok(Outcome::Ignored);
        };
        if !main.focusable && !main.has_attr("tabindex") {
            doc.set_attribute(&destination, "tabindex", "-1")?;
        }
        doc.focus(&destination)?;
        Ok(Outcome::PreventDefault)
    }
}
