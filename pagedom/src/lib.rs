pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod selector;
pub mod tree;

pub use document::{Document, ScrollBehavior};
pub use element::Element;
pub use error::DomError;
pub use event::{Event, Key};
pub use focus::FocusState;
pub use selector::Selector;
pub use tree::Tree;
