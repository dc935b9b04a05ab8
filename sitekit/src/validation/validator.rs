use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::effect::Effect;
use super::field::{Field, Validity};
use super::result::{FieldError, SubmitDecision, SubmitGate};
use super::rules;
use crate::clock::{Clock, LocalClock};
use crate::config::ValidationConfig;
use crate::message::FormMessage;

/// Result of validating one field: the state change and the writes that
/// project it onto the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub field: String,
    pub from: Validity,
    pub to: Validity,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn is_valid(&self) -> bool {
        self.to.is_valid()
    }

    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Decide a field's next state.
///
/// Prior error state is always cleared first, so running this twice on the
/// same input leaves the document exactly as the first run did.
pub fn transition(
    from: Validity,
    field: &Field,
    today: NaiveDate,
    config: &ValidationConfig,
) -> Transition {
    let mut effects = vec![
        Effect::ClearInvalid {
            field: field.id.clone(),
        },
        Effect::RemoveFieldError {
            field: field.id.clone(),
        },
    ];

    let to = match rules::check(field, today) {
        Ok(()) => Validity::Valid,
        Err(violation) => {
            effects.push(Effect::MarkInvalid {
                field: field.id.clone(),
            });
            effects.push(Effect::ShowFieldError {
                field: field.id.clone(),
                message: violation.message(config).to_string(),
            });
            Validity::Invalid(violation)
        }
    };

    Transition {
        field: field.id.clone(),
        from,
        to,
        effects,
    }
}

/// Owns per-field validity and decides live and submit-time validation.
#[derive(Debug)]
pub struct FieldValidator<C: Clock = LocalClock> {
    clock: C,
    config: ValidationConfig,
    states: HashMap<String, Validity>,
    attached: HashSet<String>,
}

impl FieldValidator<LocalClock> {
    pub fn new(config: ValidationConfig) -> Self {
        Self::with_clock(config, LocalClock)
    }
}

impl<C: Clock> FieldValidator<C> {
    pub fn with_clock(config: ValidationConfig, clock: C) -> Self {
        Self {
            clock,
            config,
            states: HashMap::new(),
            attached: HashSet::new(),
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Subscribe a field to blur/input validation.
    /// Returns false if it was already attached.
    pub fn attach(&mut self, field_id: &str) -> bool {
        self.states.entry(field_id.to_string()).or_default();
        self.attached.insert(field_id.to_string())
    }

    pub fn is_attached(&self, field_id: &str) -> bool {
        self.attached.contains(field_id)
    }

    pub fn validity(&self, field_id: &str) -> Validity {
        self.states.get(field_id).copied().unwrap_or_default()
    }

    pub fn is_invalid(&self, field_id: &str) -> bool {
        self.validity(field_id).is_invalid()
    }

    pub fn validate_field(&mut self, field: &Field) -> Transition {
        let from = self.validity(&field.id);
        let t = transition(from, field, self.clock.today(), &self.config);
        if t.changed() {
            log::debug!("[validation] {}: {:?} -> {:?}", field.id, t.from, t.to);
        }
        self.states.insert(field.id.clone(), t.to);
        t
    }

    /// Blur always re-validates an attached field.
    pub fn on_blur(&mut self, field: &Field) -> Option<Transition> {
        if !self.is_attached(&field.id) {
            return None;
        }
        Some(self.validate_field(field))
    }

    /// Typing only re-validates a field that is currently invalid, so errors
    /// clear as soon as the input is fixed without appearing mid-word.
    pub fn on_input(&mut self, field: &Field) -> Option<Transition> {
        if !self.is_attached(&field.id) || !self.is_invalid(&field.id) {
            return None;
        }
        Some(self.validate_field(field))
    }

    /// Validate every field of `form` (no short-circuit) and decide the gate.
    ///
    /// `controls` lists the form's elements in document order. When blocked,
    /// focus goes to the first of them currently invalid, which may be a field
    /// marked by live validation rather than one of `fields`.
    pub fn submit(&mut self, form: &str, fields: &[Field], controls: &[String]) -> SubmitDecision {
        let mut effects = Vec::new();
        let mut errors = Vec::new();

        for field in fields {
            let t = self.validate_field(field);
            if let Some(violation) = t.to.violation() {
                errors.push(FieldError {
                    field: field.id.clone(),
                    message: violation.message(&self.config).to_string(),
                });
            }
            effects.extend(t.effects);
        }

        if errors.is_empty() {
            log::debug!("[validation] {form}: {} fields valid, submitting", fields.len());
            effects.push(Effect::MarkSending {
                form: form.to_string(),
            });
            return SubmitDecision {
                gate: SubmitGate::Open,
                effects,
            };
        }

        log::debug!(
            "[validation] {form}: blocked, {} of {} fields invalid",
            errors.len(),
            fields.len()
        );
        effects.push(Effect::PreventDefault);
        effects.push(Effect::ShowMessage {
            form: form.to_string(),
            message: FormMessage::error(self.config.blocked_message.clone()),
        });
        let target = controls
            .iter()
            .find(|id| self.is_invalid(id))
            .cloned()
            .unwrap_or_else(|| errors[0].field.clone());
        effects.push(Effect::Focus { target });

        SubmitDecision {
            gate: SubmitGate::Blocked(errors),
            effects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::validation::{FieldKind, Violation};

    fn validator() -> FieldValidator<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        FieldValidator::with_clock(ValidationConfig::default(), FixedClock(today))
    }

    #[test]
    fn transition_always_clears_first() {
        let field = Field::new("name", FieldKind::Text).required().value("Ada");
        let t = transition(
            Validity::Invalid(Violation::Required),
            &field,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            &ValidationConfig::default(),
        );
        assert_eq!(
            t.effects,
            vec![
                Effect::ClearInvalid { field: "name".into() },
                Effect::RemoveFieldError { field: "name".into() },
            ]
        );
        assert!(t.is_valid());
        assert!(t.changed());
    }

    #[test]
    fn failing_transition_annotates() {
        let field = Field::new("when", FieldKind::Date).value("2024-06-14");
        let t = transition(
            Validity::Valid,
            &field,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            &ValidationConfig::default(),
        );
        assert_eq!(t.to, Validity::Invalid(Violation::PastDate));
        assert_eq!(
            t.effects[2..],
            [
                Effect::MarkInvalid { field: "when".into() },
                Effect::ShowFieldError {
                    field: "when".into(),
                    message: "Please select a future date".into(),
                },
            ]
        );
    }

    #[test]
    fn input_only_revalidates_invalid_fields() {
        let mut v = validator();
        v.attach("email");

        let typing = Field::new("email", FieldKind::Email).required().value("a");
        assert!(v.on_input(&typing).is_none());

        let t = v.on_blur(&typing).unwrap();
        assert_eq!(t.to, Validity::Invalid(Violation::Email));

        let fixed = Field::new("email", FieldKind::Email).required().value("a@b.io");
        let t = v.on_input(&fixed).unwrap();
        assert!(t.is_valid());
        assert!(v.on_input(&fixed).is_none());
    }

    #[test]
    fn unattached_fields_ignore_live_events() {
        let mut v = validator();
        let field = Field::new("other", FieldKind::Text).required();
        assert!(v.on_blur(&field).is_none());
        assert!(v.on_input(&field).is_none());
        assert!(v.validity("other").is_valid());
    }

    #[test]
    fn submit_evaluates_every_field() {
        let mut v = validator();
        let fields = [
            Field::new("name", FieldKind::Text).required().value("Ada"),
            Field::new("email", FieldKind::Email).required().value("nope"),
            Field::new("date", FieldKind::Date).required(),
        ];
        let controls = ["name", "email", "date"].map(String::from);
        let decision = v.submit("contact", &fields, &controls);

        assert!(!decision.allowed());
        assert_eq!(decision.gate.errors().len(), 2);
        assert_eq!(decision.gate.first_invalid(), Some("email"));
        assert!(v.is_invalid("date"));
        assert!(decision.effects.contains(&Effect::PreventDefault));
        assert_eq!(
            decision.effects.last(),
            Some(&Effect::Focus { target: "email".into() })
        );
    }

    #[test]
    fn open_gate_marks_sending() {
        let mut v = validator();
        let fields = [Field::new("date", FieldKind::Date).required().value("2024-06-15")];
        let decision = v.submit("booking", &fields, &["date".to_string()]);

        assert!(decision.allowed());
        assert!(!decision.effects.contains(&Effect::PreventDefault));
        assert_eq!(
            decision.effects.last(),
            Some(&Effect::MarkSending { form: "booking".into() })
        );
    }

    #[test]
    fn focus_prefers_earlier_live_invalid_control() {
        let mut v = validator();
        v.attach("promo");
        v.on_blur(&Field::new("promo", FieldKind::Email).value("bad"));

        let fields = [Field::new("name", FieldKind::Text).required()];
        let controls = ["promo", "name", "send"].map(String::from);
        let decision = v.submit("contact", &fields, &controls);

        assert_eq!(decision.gate.first_invalid(), Some("name"));
        assert_eq!(
            decision.effects.last(),
            Some(&Effect::Focus { target: "promo".into() })
        );
    }
}
