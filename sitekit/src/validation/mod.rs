//! Form field validation.
//!
//! Validation is split into a pure decision step and an effect list. The
//! [`FieldValidator`] owns each field's [`Validity`]; deciding a field produces
//! a [`Transition`] whose [`Effect`]s describe the document writes (invalid
//! marker, inline annotation, banner, focus). The page runtime applies them.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sitekit::FixedClock;
//! use sitekit::config::ValidationConfig;
//! use sitekit::validation::{Field, FieldKind, FieldValidator, Violation};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
//! let mut validator = FieldValidator::with_clock(ValidationConfig::default(), FixedClock(today));
//!
//! let email = Field::new("email", FieldKind::Email).required().value("ada@example");
//! let transition = validator.validate_field(&email);
//! assert_eq!(transition.to.violation(), Some(Violation::Email));
//! ```

mod effect;
mod field;
mod result;
mod rules;
mod validator;

pub use effect::Effect;
pub use field::{Field, FieldKind, Validity};
pub use result::{FieldError, SubmitDecision, SubmitGate};
pub use rules::{check, is_email_shaped, is_past_date, Violation};
pub use validator::{transition, FieldValidator, Transition};

/// ID of the inline annotation belonging to `field_id`.
///
/// Deriving it from the field keeps at most one annotation per field.
pub fn error_id(field_id: &str) -> String {
    format!("{field_id}-error")
}
