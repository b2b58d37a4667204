//! The add/edit state machine.

use crate::form::{Field, FormError, FormFields, RequiredFields};
use crate::model::{Resource, ResourceDraft, ResourceId};
use crate::store::ResourceStore;
use tracing::{debug, info, instrument, warn};

/// Whether a submit creates a record or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Editing(ResourceId),
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Resource),
    Updated(Resource),
}

/// Form state: mode, target and field values.
///
/// ```text
///             select_for_edit(r)
///   Create ───────────────────────▶ Editing(r.id)
///     ▲  ◀── submit ok / cancel ──┘     │ select_for_edit(r2)
///     │                                 ▼
///     └──────── submit ok / cancel ─ Editing(r2.id)
/// ```
///
/// A failed submit (missing field or transport error) leaves mode and fields
/// untouched. Deleting the record being edited does not reset the form; use
/// [`is_editing`](Self::is_editing) to detect that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceForm {
    mode: FormMode,
    fields: FormFields,
    required: RequiredFields,
}

impl ResourceForm {
    pub fn new(required: RequiredFields) -> Self {
        Self {
            mode: FormMode::Create,
            fields: FormFields::default(),
            required,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn required(&self) -> RequiredFields {
        self.required
    }

    pub fn is_editing(&self, id: &ResourceId) -> bool {
        matches!(&self.mode, FormMode::Editing(target) if target == id)
    }

    /// Loads `resource` into the form and targets it for the next submit.
    pub fn select_for_edit(&mut self, resource: &Resource) {
        debug!(id = %resource.id, "Editing");
        self.fields = FormFields::from_resource(resource);
        self.mode = FormMode::Editing(resource.id.clone());
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Back to an empty create form. No request is sent.
    pub fn cancel(&mut self) {
        self.mode = FormMode::Create;
        self.fields = FormFields::default();
    }

    /// Same as [`cancel`](Self::cancel).
    pub fn clear(&mut self) {
        self.cancel();
    }

    /// The request body, or the first empty required field.
    pub fn validate(&self) -> Result<ResourceDraft, FormError> {
        match self.fields.first_missing(self.required) {
            Some(field) => Err(FormError::MissingField(field)),
            None => Ok(self.fields.to_draft()),
        }
    }

    /// Sends the form through the store: `create` in create mode, a full
    /// `update` of the target in edit mode. The store resyncs its snapshot,
    /// then the form is cleared.
    #[instrument(skip(self, store), fields(mode = ?self.mode))]
    pub async fn submit(&mut self, store: &ResourceStore) -> Result<SubmitOutcome, FormError> {
        let draft = self.validate().inspect_err(|e| debug!(error = %e, "Rejected"))?;

        let outcome = match &self.mode {
            FormMode::Create => store.create(&draft).await.map(SubmitOutcome::Created),
            FormMode::Editing(id) => store.update(id, &draft).await.map(SubmitOutcome::Updated),
        };

        match outcome {
            Ok(outcome) => {
                info!("Submitted");
                self.cancel();
                Ok(outcome)
            }
            Err(e) => {
                warn!(error = %e, "Submit failed; form kept");
                Err(e.into())
            }
        }
    }
}
