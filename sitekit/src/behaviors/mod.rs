//! Stateless page affordances.
//!
//! Each behavior reads what it needs from the document on every event and
//! writes the result back; none keeps a model of its own.

mod back_to_top;
mod focus_visible;
mod lazy_images;
mod menu;
mod skip_link;

pub use back_to_top::BackToTop;
pub use focus_visible::FocusVisible;
pub use lazy_images::LazyImages;
pub use menu::MobileMenu;
pub use skip_link::SkipLink;

use pagedom::{Document, Event};

use crate::config::SiteConfig;
use crate::error::Result;

/// What a behavior did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Handled,
    /// Handled, and the event's default action must not run.
    PreventDefault,
}

impl Outcome {
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}

pub trait Behavior: std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn handle(&mut self, doc: &mut dyn Document, event: &Event) -> Result<Outcome>;
}

/// Every built-in behavior, configured from `config`.
pub fn from_config(config: &SiteConfig) -> Result<Vec<Box<dyn Behavior>>> {
    Ok(vec![
        Box::new(BackToTop::new(&config.back_to_top)?),
        Box::new(MobileMenu::new(&config.menu)?),
        Box::new(FocusVisible::new(&config.focus_visible)),
        Box::new(LazyImages::new(&config.lazy_images)?),
        Box::new(SkipLink::new(&config.skip_link)?),
    ])
}

/// True if `target` is inside any element matching one of `roots`.
pub(crate) fn within_any(doc: &dyn Document, roots: &[String], target: &str) -> Option<String> {
    roots
        .iter()
        .find(|root| doc.contains(root, target))
        .cloned()
}
