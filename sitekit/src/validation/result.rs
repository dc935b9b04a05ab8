use super::effect::Effect;

/// A field that failed validation at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Whether a submission may proceed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitGate {
    /// All required fields passed.
    #[default]
    Open,
    /// One or more fields failed, in document order.
    Blocked(Vec<FieldError>),
}

impl SubmitGate {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Open => &[],
            Self::Blocked(errors) => errors,
        }
    }

    /// ID of the first field that failed at submit time.
    pub fn first_invalid(&self) -> Option<&str> {
        self.errors().first().map(|e| e.field.as_str())
    }
}

/// Outcome of a submit attempt, before it is applied to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitDecision {
    pub gate: SubmitGate,
    pub effects: Vec<Effect>,
}

impl SubmitDecision {
    pub fn allowed(&self) -> bool {
        self.gate.is_open()
    }
}
