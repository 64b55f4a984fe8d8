use tracing::debug;

use crate::domain::contact::{Contact, ContactId, NewContact};
use crate::errors::AppError;
use crate::store::ContactStore;
use crate::validation::{Field, FieldError, field_errors, validate_contact};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ContactId),
}

/// Create/edit form state. Values are staged here and only reach the store
/// through [`ContactForm::submit`].
#[derive(Debug, Clone)]
pub struct ContactForm {
    mode: FormMode,
    values: NewContact,
}

impl ContactForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            values: NewContact::default(),
        }
    }

    /// Opens the form pre-filled from the store, `None` if `id` is unknown.
    pub fn edit(store: &ContactStore, id: ContactId) -> Option<Self> {
        let contact = store.get(id)?;
        Some(Self {
            mode: FormMode::Edit(id),
            values: contact.to_draft(),
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => "New Contact".to_string(),
            FormMode::Edit(id) => format!("Edit Contact #{id}"),
        }
    }

    pub fn values(&self) -> &NewContact {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        field.value_of(&self.values)
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let value = value.to_string();
        match field {
            Field::Name => self.values.name = value,
            Field::Email => self.values.email = value,
            Field::Phone => self.values.phone = value,
            Field::Address => self.values.address = value,
            Field::City => self.values.city = value,
            Field::State => self.values.state = value,
            Field::Zip => self.values.zip = value,
            Field::Notes => {
                self.values.notes = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                }
            }
        }
    }

    pub fn errors(&self) -> Result<Vec<FieldError>, AppError> {
        field_errors(&self.values)
    }

    /// Validates, then adds (create mode) or updates under the original id
    /// (edit mode).
    pub fn submit(&self, store: &mut ContactStore) -> Result<Contact, AppError> {
        validate_contact(&self.values)?;

        let contact = match self.mode {
            FormMode::Create => store.add(self.values.clone()),
            FormMode::Edit(id) => store.update(self.values.clone().with_id(id)),
        };

        debug!(id = contact.id, mode = ?self.mode, "form submitted");
        Ok(contact)
    }

    /// Create mode clears every field; edit mode reloads the stored record.
    /// Returns `false` when the record being edited no longer exists.
    pub fn reset(&mut self, store: &ContactStore) -> bool {
        match self.mode {
            FormMode::Create => {
                self.values = NewContact::default();
                true
            }
            FormMode::Edit(id) => match store.get(id) {
                Some(contact) => {
                    self.values = contact.to_draft();
                    true
                }
                None => false,
            },
        }
    }
}
