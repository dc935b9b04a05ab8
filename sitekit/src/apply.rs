//! Applies validation effects to a document.

use pagedom::{Document, DomError, Element, Selector};

use crate::config::SiteConfig;
use crate::deferred::{Deferred, Scheduler};
use crate::error::Result;
use crate::message::FormMessage;
use crate::validation::{error_id, Effect};

pub(crate) struct Applier<'a, D: Document + ?Sized> {
    pub doc: &'a mut D,
    pub config: &'a SiteConfig,
    pub scheduler: &'a mut Scheduler,
    pub submit_selector: &'a Selector,
    pub message_selector: &'a Selector,
}

impl<D: Document + ?Sized> Applier<'_, D> {
    /// Apply effects in order. Returns true if the default action was cancelled.
    pub fn apply(&mut self, effects: impl IntoIterator<Item = Effect>) -> Result<bool> {
        let mut prevented = false;
        for effect in effects {
            match effect {
                Effect::ClearInvalid { field } => {
                    self.doc
                        .remove_class(&field, &self.config.validation.invalid_class)?;
                }
                Effect::RemoveFieldError { field } => {
                    self.doc.remove(&error_id(&field));
                }
                Effect::MarkInvalid { field } => {
                    self.doc
                        .add_class(&field, &self.config.validation.invalid_class)?;
                }
                Effect::ShowFieldError { field, message } => {
                    self.show_field_error(&field, message)?;
                }
                Effect::PreventDefault => prevented = true,
                Effect::ShowMessage { form, message } => {
                    self.show_message(&form, &message)?;
                }
                Effect::Focus { target } => {
                    self.doc.focus(&target)?;
                }
                Effect::MarkSending { form } => self.mark_sending(&form)?,
            }
        }
        Ok(prevented)
    }

    fn show_field_error(&mut self, field: &str, message: String) -> Result<()> {
        let parent = self
            .doc
            .parent_of(field)
            .map(|p| p.id.clone())
            .ok_or_else(|| DomError::NoParent(field.to_string()))?;
        let annotation = Element::div()
            .id(error_id(field))
            .class(self.config.validation.error_class.clone())
            .attr("role", "alert")
            .content(message);
        self.doc.append_child(&parent, annotation)?;
        Ok(())
    }

    /// Replace every banner with `message`, placed right before `form`, and
    /// schedule its removal. Returns the new banner's ID.
    pub fn show_message(&mut self, form: &str, message: &FormMessage) -> Result<String> {
        if self.doc.parent_of(form).is_none() {
            let err = if self.doc.element(form).is_some() {
                DomError::NoParent(form.to_string())
            } else {
                DomError::NotFound(form.to_string())
            };
            return Err(err.into());
        }
        for stale in self.doc.query_all(self.message_selector) {
            self.doc.remove(&stale);
        }

        let banner = message.element(&self.config.messages.class);
        let id = self.doc.insert_before(form, banner)?;
        self.scheduler.schedule(
            Deferred::RemoveElement { id: id.clone() },
            self.config.messages.lifetime(),
        );
        Ok(id)
    }

    fn mark_sending(&mut self, form: &str) -> Result<()> {
        let Some(button) = self
            .doc
            .query_all_within(form, self.submit_selector)?
            .into_iter()
            .next()
        else {
            log::warn!("[validation] {form} has no submit control");
            return Ok(());
        };
        self.doc.set_disabled(&button, true)?;
        self.doc
            .set_text(&button, &self.config.validation.sending_label)?;
        Ok(())
    }
}
