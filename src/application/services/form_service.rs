//! Live validation and submit gating for the login and register forms.

use crate::domain::entities::{FieldKey, FormKind};
use crate::domain::ports::{FieldControl, SubmitControl};
use crate::domain::validation::validate;

/// What the browser should do with a submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field is valid; let the native submission run.
    Proceed,
    /// At least one field is invalid; cancel the submission.
    Rejected { invalid: Vec<FieldKey> },
    /// A submission already proceeded; cancel duplicates.
    InFlight,
}

impl SubmitOutcome {
    pub fn should_cancel(&self) -> bool {
        !matches!(self, SubmitOutcome::Proceed)
    }
}

struct BoundField<F> {
    key: FieldKey,
    control: F,
    touched: bool,
}

/// Controller for one authentication form.
///
/// Errors only appear for *touched* fields: a field becomes touched on its
/// first blur or on the first submit attempt. After that every input event
/// revalidates it, so the error slot always reflects the current value.
pub struct FormController<F: FieldControl, S: SubmitControl> {
    kind: FormKind,
    fields: Vec<BoundField<F>>,
    submit: S,
    busy_label: String,
    submitting: bool,
}

impl<F: FieldControl, S: SubmitControl> FormController<F, S> {
    /// Binds the controller to the fields `lookup` finds for `kind`.
    ///
    /// Fields are kept in the form's declared order; keys `lookup` cannot
    /// resolve are skipped.
    pub fn bind<L>(
        kind: FormKind,
        mut lookup: L,
        submit: S,
        busy_label: impl Into<String>,
    ) -> Self
    where
        L: FnMut(FieldKey) -> Option<F>,
    {
        let fields = kind
            .fields()
            .iter()
            .filter_map(|&key| {
                lookup(key).map(|control| BoundField {
                    key,
                    control,
                    touched: false,
                })
            })
            .collect();

        Self {
            kind,
            fields,
            submit,
            busy_label: busy_label.into(),
            submitting: false,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn field_keys(&self) -> Vec<FieldKey> {
        self.fields.iter().map(|f| f.key).collect()
    }

    pub fn is_touched(&self, key: FieldKey) -> bool {
        self.fields.iter().any(|f| f.key == key && f.touched)
    }

    /// Loss of focus: touch the field and validate it.
    ///
    /// Returns whether the field is valid; unknown keys count as valid.
    pub fn on_blur(&mut self, key: FieldKey) -> bool {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) => {
                field.touched = true;
                revalidate(field)
            }
            None => true,
        }
    }

    /// Value change: revalidate only fields that were already touched.
    pub fn on_input(&mut self, key: FieldKey) {
        if let Some(field) = self.fields.iter().find(|f| f.key == key && f.touched) {
            revalidate(field);
        }
    }

    /// Submit attempt: touch and validate every field in declared order.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            tracing::debug!(form = %self.kind, "submission already in flight");
            return SubmitOutcome::InFlight;
        }

        let invalid: Vec<FieldKey> = self
            .fields
            .iter_mut()
            .filter_map(|field| {
                field.touched = true;
                (!revalidate(field)).then_some(field.key)
            })
            .collect();

        if !invalid.is_empty() {
            tracing::debug!(form = %self.kind, ?invalid, "submission blocked by validation");
            return SubmitOutcome::Rejected { invalid };
        }

        self.submitting = true;
        self.submit.disable();
        self.submit.show_busy(&self.busy_label);
        tracing::info!(form = %self.kind, "submitting");

        SubmitOutcome::Proceed
    }
}

fn revalidate<F: FieldControl>(field: &BoundField<F>) -> bool {
    let value = field.control.read_value();
    let result = validate(field.key, value.trim());
    let message = result.as_ref().err().map_or("", |e| e.message);

    field.control.set_error(message);
    field.control.set_invalid_style(result.is_err());

    result.is_ok()
}
