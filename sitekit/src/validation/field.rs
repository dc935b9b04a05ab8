use pagedom::Element;

use super::rules::Violation;

/// Which rule family applies to a field, derived from its markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Date,
    Other,
}

impl FieldKind {
    pub fn of(element: &Element) -> Self {
        match element.input_type().as_deref() {
            Some("text") => Self::Text,
            Some("email") => Self::Email,
            Some("date") => Self::Date,
            Some(_) => Self::Other,
            None if element.tag == "textarea" => Self::Text,
            None => Self::Other,
        }
    }
}

/// Snapshot of one form control, taken right before it is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    /// Current content with surrounding whitespace stripped.
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            kind,
            required: false,
        }
    }

    pub fn from_element(element: &Element) -> Self {
        Self {
            id: element.id.clone(),
            value: element.value.trim().to_string(),
            kind: FieldKind::of(element),
            required: element.has_attr("required"),
        }
    }

    pub fn value(mut self, value: impl AsRef<str>) -> Self {
        self.value = value.as_ref().trim().to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Validity of a single field. Every field starts out `Valid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Valid,
    Invalid(Violation),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn violation(&self) -> Option<Violation> {
        match self {
            Self::Valid => None,
            Self::Invalid(v) => Some(*v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_markup() {
        assert_eq!(FieldKind::of(&Element::input("email")), FieldKind::Email);
        assert_eq!(FieldKind::of(&Element::input("DATE")), FieldKind::Date);
        assert_eq!(FieldKind::of(&Element::input("text")), FieldKind::Text);
        assert_eq!(FieldKind::of(&Element::new("input")), FieldKind::Text);
        assert_eq!(FieldKind::of(&Element::input("tel")), FieldKind::Other);
        assert_eq!(FieldKind::of(&Element::textarea()), FieldKind::Text);
        assert_eq!(FieldKind::of(&Element::new("select")), FieldKind::Other);
    }

    #[test]
    fn snapshot_trims_value() {
        let el = Element::input("email").id("email").required().value("  a@b.co \n");
        let field = Field::from_element(&el);
        assert_eq!(field.id, "email");
        assert_eq!(field.value, "a@b.co");
        assert!(field.required);
        assert_eq!(field.kind, FieldKind::Email);
    }
}
