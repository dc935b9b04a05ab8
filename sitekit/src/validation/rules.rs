use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::field::{Field, FieldKind};
use crate::config::ValidationConfig;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

/// Format of the value a date input submits.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    Required,
    Email,
    PastDate,
}

impl Violation {
    pub fn message<'a>(&self, config: &'a ValidationConfig) -> &'a str {
        match self {
            Self::Required => &config.required_message,
            Self::Email => &config.email_message,
            Self::PastDate => &config.date_message,
        }
    }
}

/// Run the rules in order (required, email shape, future date) and report the
/// first one that fails.
pub fn check(field: &Field, today: NaiveDate) -> Result<(), Violation> {
    let value = field.value.as_str();

    if value.is_empty() {
        return if field.required {
            Err(Violation::Required)
        } else {
            Ok(())
        };
    }

    match field.kind {
        FieldKind::Email if !is_email_shaped(value) => Err(Violation::Email),
        FieldKind::Date if is_past_date(value, today) => Err(Violation::PastDate),
        _ => Ok(()),
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot somewhere
/// after it with text on both sides.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// True only for a parseable date strictly before `today`.
/// Unparseable input never counts as past.
pub fn is_past_date(value: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok_and(|date| date < today)
}
