use pagedom::{Document, DomError, Event, Selector};

use crate::apply::Applier;
use crate::behaviors::{self, Behavior, LazyImages, Outcome};
use crate::clock::{Clock, LocalClock};
use crate::config::SiteConfig;
use crate::deferred::{Deferred, Scheduler};
use crate::error::Result;
use crate::message::FormMessage;
use crate::validation::{Effect, Field, FieldValidator, SubmitGate};

/// What happened to an event's default action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub default_prevented: bool,
}

/// Runtime wiring every behavior to one document.
///
/// Events are handled one at a time and each runs to completion, so two
/// validations of the same field never interleave. Deferred work (banner
/// removal) is driven by awaiting [`Page::next_deferred`] inside a Tokio
/// runtime, or by polling [`Page::run_expired`] from synchronous code.
#[derive(Debug)]
pub struct Page<D: Document, C: Clock = LocalClock> {
    doc: D,
    config: SiteConfig,
    validator: FieldValidator<C>,
    scheduler: Scheduler,
    behaviors: Vec<Box<dyn Behavior>>,
    form_selector: Selector,
    field_selector: Selector,
    submit_selector: Selector,
    message_selector: Selector,
    any_selector: Selector,
}

impl<D: Document> Page<D, LocalClock> {
    pub fn new(doc: D, config: SiteConfig) -> Result<Self> {
        Self::with_clock(doc, config, LocalClock)
    }
}

impl<D: Document, C: Clock> Page<D, C> {
    /// Build the page and attach live validation to every required field of
    /// every form currently in the document.
    pub fn with_clock(doc: D, config: SiteConfig, clock: C) -> Result<Self> {
        let validation = &config.validation;
        let form_selector = Selector::parse(&validation.form_selector)?;
        let field_selector = Selector::parse(&validation.field_selector)?;
        let submit_selector = Selector::parse(&validation.submit_selector)?;
        let message_selector = Selector::parse(&format!(".{}", config.messages.class))?;
        let any_selector = Selector::parse("*")?;

        let mut page = Self {
            doc,
            validator: FieldValidator::with_clock(validation.clone(), clock),
            scheduler: Scheduler::new(),
            behaviors: behaviors::from_config(&config)?,
            config,
            form_selector,
            field_selector,
            submit_selector,
            message_selector,
            any_selector,
        };

        for form in page.doc.query_all(&page.form_selector) {
            for field in page.doc.query_all_within(&form, &page.field_selector)? {
                page.validator.attach(&field);
            }
        }
        Ok(page)
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn into_document(self) -> D {
        self.doc
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn validator(&self) -> &FieldValidator<C> {
        &self.validator
    }

    /// Subscribe a field to blur/input validation.
    pub fn attach_live_validation(&mut self, field: &str) -> Result<bool> {
        if self.doc.element(field).is_none() {
            return Err(DomError::NotFound(field.to_string()).into());
        }
        Ok(self.validator.attach(field))
    }

    /// Handle one event.
    pub fn dispatch(&mut self, event: Event) -> Result<Dispatch> {
        log::trace!("[page] {event:?}");
        let mut prevented = false;

        match &event {
            Event::Blur { target } => {
                if let Some(field) = self.read_field(target)
                    && let Some(t) = self.validator.on_blur(&field)
                {
                    self.apply(t.effects)?;
                }
            }
            Event::Input { target, value } => {
                self.doc.set_value(target, value)?;
                if let Some(field) = self.read_field(target)
                    && let Some(t) = self.validator.on_input(&field)
                {
                    self.apply(t.effects)?;
                }
            }
            Event::Submit { target } if self.is_form(target) => {
                prevented |= !self.handle_submit(target)?.is_open();
            }
            _ => {}
        }

        for behavior in &mut self.behaviors {
            let outcome = behavior.handle(&mut self.doc, &event)?;
            if outcome != Outcome::Ignored {
                log::trace!("[page] {} handled {:?}", behavior.name(), event.target());
            }
            prevented |= outcome.prevents_default();
        }

        Ok(Dispatch {
            default_prevented: prevented,
        })
    }

    /// Validate one field and reflect the result in the document.
    pub fn validate_field(&mut self, field: &str) -> Result<bool> {
        let field = self
            .read_field(field)
            .ok_or_else(|| DomError::NotFound(field.to_string()))?;
        let t = self.validator.validate_field(&field);
        let valid = t.is_valid();
        self.apply(t.effects)?;
        Ok(valid)
    }

    /// Validate every required field of `form` and either block the
    /// submission (banner, focus on the first field marked invalid in document
    /// order) or put the submit control into its sending state.
    pub fn handle_submit(&mut self, form: &str) -> Result<SubmitGate> {
        let fields: Vec<Field> = self
            .doc
            .query_all_within(form, &self.field_selector)?
            .iter()
            .filter_map(|id| self.doc.element(id))
            .map(Field::from_element)
            .collect();

        let controls = self.doc.query_all_within(form, &self.any_selector)?;
        let decision = self.validator.submit(form, &fields, &controls);
        self.apply(decision.effects)?;
        Ok(decision.gate)
    }

    /// Show a banner before `form`, replacing any existing one.
    /// Returns the banner's element ID.
    pub fn show_message(&mut self, form: &str, message: impl Into<FormMessage>) -> Result<String> {
        self.applier().show_message(form, &message.into())
    }

    /// Images waiting for the visibility observer.
    pub fn lazy_targets(&self) -> Result<Vec<String>> {
        Ok(LazyImages::new(&self.config.lazy_images)?.targets(&self.doc))
    }

    pub fn pending_deferred(&self) -> usize {
        self.scheduler.len()
    }

    /// Wait for the next deferred task, run it, and return it.
    /// Returns `None` when nothing is scheduled.
    pub async fn next_deferred(&mut self) -> Option<Deferred> {
        let task = self.scheduler.next().await?;
        self.run_deferred(&task);
        Some(task)
    }

    /// Run every deferred task whose delay has already elapsed, without
    /// waiting for the rest. Usable outside a Tokio runtime.
    pub fn run_expired(&mut self) -> Vec<Deferred> {
        let due = self.scheduler.take_due();
        for task in &due {
            self.run_deferred(task);
        }
        due
    }

    fn run_deferred(&mut self, task: &Deferred) {
        match task {
            Deferred::RemoveElement { id } => {
                if self.doc.remove(id).is_none() {
                    log::debug!("[page] {id} already gone");
                }
            }
        }
    }

    fn is_form(&self, id: &str) -> bool {
        self.doc
            .element(id)
            .is_some_and(|el| self.form_selector.matches(el))
    }

    fn read_field(&self, id: &str) -> Option<Field> {
        self.doc.element(id).map(Field::from_element)
    }

    fn applier(&mut self) -> Applier<'_, D> {
        Applier {
            doc: &mut self.doc,
            config: &self.config,
            scheduler: &mut self.scheduler,
            submit_selector: &self.submit_selector,
            message_selector: &self.message_selector,
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Result<bool> {
        self.applier().apply(effects)
    }
}
