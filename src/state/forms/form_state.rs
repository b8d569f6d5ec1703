//! Demo request form state

use super::field::DemoField;
use crate::intake::DemoRequest;

/// The values typed into the demo request dialog.
///
/// Values are only replaced through [`DemoForm::with`], which produces a new
/// form; the workflow owns the current instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoForm {
    name: String,
    email: String,
    company: String,
    timezone: String,
    message: String,
}

impl DemoForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn value(&self, field: DemoField) -> &str {
        match field {
            DemoField::Name => &self.name,
            DemoField::Email => &self.email,
            DemoField::Company => &self.company,
            DemoField::Timezone => &self.timezone,
            DemoField::Message => &self.message,
        }
    }

    /// Return a copy of the form with one field replaced
    #[must_use]
    pub fn with(mut self, field: DemoField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            DemoField::Name => self.name = value,
            DemoField::Email => self.email = value,
            DemoField::Company => self.company = value,
            DemoField::Timezone => self.timezone = value,
            DemoField::Message => self.message = value,
        }
        self
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        DemoField::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    /// Required fields that have no value yet, in display order
    pub fn missing_required(&self) -> Vec<DemoField> {
        DemoField::ALL
            .iter()
            .copied()
            .filter(|f| f.is_required() && self.value(*f).is_empty())
            .collect()
    }

    /// Build the outgoing payload. An empty company becomes `None`.
    pub fn to_request(&self) -> DemoRequest {
        DemoRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            company: if self.company.is_empty() {
                None
            } else {
                Some(self.company.clone())
            },
            timezone: self.timezone.clone(),
            message: self.message.clone(),
        }
    }
}
