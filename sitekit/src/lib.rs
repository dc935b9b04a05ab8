//! Page behaviors for a static site: form validation with inline errors and a
//! submission gate, plus the small affordances around it (back-to-top button,
//! mobile menu, keyboard focus styling, lazy images, skip links).
//!
//! Everything runs against an injected [`pagedom::Document`], so the same code
//! drives a real rendering surface or an in-memory [`pagedom::Tree`].

pub mod behaviors;
pub mod clock;
pub mod config;
pub mod deferred;
pub mod error;
pub mod message;
pub mod page;
pub mod validation;

mod apply;

pub use clock::{Clock, FixedClock, LocalClock};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use message::{FormMessage, MessageKind};
pub use page::{Dispatch, Page};

pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, LocalClock};
    pub use crate::config::SiteConfig;
    pub use crate::message::{FormMessage, MessageKind};
    pub use crate::page::{Dispatch, Page};
    pub use crate::validation::{Field, FieldKind, FieldValidator, Validity, Violation};

    pub use pagedom::{Document, Element, Event, Key, Tree};
}
