use crate::message::FormMessage;

/// A document write requested by a validation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Drop the invalid marker class from a field.
    ClearInvalid { field: String },
    /// Remove the field's inline annotation if it has one.
    RemoveFieldError { field: String },
    MarkInvalid { field: String },
    /// Attach an inline annotation (role `alert`) next to the field.
    ShowFieldError { field: String, message: String },
    /// Cancel the event's default action.
    PreventDefault,
    /// Replace any page banner with this one, placed before `form`.
    ShowMessage { form: String, message: FormMessage },
    Focus { target: String },
    /// Disable the form's submit control and show the sending label.
    MarkSending { form: String },
}
