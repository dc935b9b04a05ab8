use pagedom::{Document, Event, Selector};

use super::{Behavior, Outcome};
use crate::config::LazyImagesConfig;
use crate::error::Result;

const DATA_SRC: &str = "data-src";

/// Defers image loading until the image scrolls into view.
///
/// Images carrying `data-src` are handed to the visibility observer via
/// [`LazyImages::targets`]. On intersection the source is moved into `src`,
/// which also takes the image out of the target set, so each loads once.
#[derive(Debug)]
pub struct LazyImages {
    selector: Selector,
    pending_class: String,
    loaded_class: String,
}

impl LazyImages {
    pub fn new(config: &LazyImagesConfig) -> Result<Self> {
        Ok(Self {
            selector: Selector::parse(&config.selector)?,
            pending_class: config.pending_class.clone(),
            loaded_class: config.loaded_class.clone(),
        })
    }

    /// Elements the visibility observer should watch.
    pub fn targets(&self, doc: &dyn Document) -> Vec<String> {
        doc.query_all(&self.selector)
    }
}

impl Behavior for LazyImages {
    fn name(&self) -> &'static str {
        "lazy-images"
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &Event) -> Result<Outcome> {
        let Event::Intersect { target } = event else {
            return Ok(Outcome::Ignored);
        };
        let Some(el) = doc.element(target) else {
            return Ok(Outcome::Ignored);
        };
        if !self.selector.matches(el) {
            return Ok(Outcome::Ignored);
        }
        let Some(src) = el.get_attr(DATA_SRC).map(str::to_string) else {
            return Ok(Outcome::Ignored);
        };

        doc.set_attribute(target, "src", &src)?;
        doc.remove_attribute(target, DATA_SRC)?;
        doc.remove_class(target, &self.pending_class)?;
        doc.add_class(target, &self.loaded_class)?;
        log::trace!("[lazy] {target} <- {src}");
        Ok(Outcome::Handled)
    }
}
