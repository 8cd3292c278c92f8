use mhr_shared::{
    domain::CourtOrderInfo,
    error::{FieldError, ValidationReport},
};
use tokio::sync::broadcast;
use tracing::debug;

use super::{
    field::CourtOrderField,
    validation::{collect_field_errors, validate_court_order, validate_field, FieldValidation},
    view::{ElementKind, RenderedElement},
    CourtOrderDisplay, CourtOrderEvent,
};

const COURT_ORDER_EVENT_CAPACITY: usize = 64;

/// Editable court order form. Holds its own copy of the record; the store only
/// changes when a parent commits an emitted [`CourtOrderEvent::DataChanged`].
pub struct CourtOrderEditor {
    info: CourtOrderInfo,
    validations: Vec<FieldValidation>,
    show_errors: bool,
    events: broadcast::Sender<CourtOrderEvent>,
}

impl CourtOrderEditor {
    pub fn new(info: CourtOrderInfo) -> Self {
        let (events, _) = broadcast::channel(COURT_ORDER_EVENT_CAPACITY);
        let validations = validate_court_order(&info);
        Self {
            info,
            validations,
            show_errors: false,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CourtOrderEvent> {
        self.events.subscribe()
    }

    pub fn info(&self) -> &CourtOrderInfo {
        &self.info
    }

    pub fn value(&self, field: CourtOrderField) -> &str {
        field.read(&self.info)
    }

    pub fn validation(&self, field: CourtOrderField) -> &FieldValidation {
        &self.validations[field.index()]
    }

    pub fn is_valid(&self) -> bool {
        self.validations.iter().all(FieldValidation::is_valid)
    }

    pub fn set_show_errors(&mut self, show_errors: bool) {
        self.show_errors = show_errors;
    }

    /// Applies one edit verbatim, re-validates, then emits the record followed by its validity.
    pub fn set_value(&mut self, field: CourtOrderField, value: impl Into<String>) {
        field.write(&mut self.info, value.into());
        self.validations[field.index()] = validate_field(field, field.read(&self.info));

        let valid = self.is_valid();
        debug!(field = field.key(), valid, "court order field changed");

        let _ = self
            .events
            .send(CourtOrderEvent::DataChanged(self.info.clone()));
        let _ = self.events.send(CourtOrderEvent::ValidityChanged(valid));
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        collect_field_errors(&self.validations, self.show_errors)
    }

    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            valid: self.is_valid(),
            errors: self.field_errors(),
        }
    }
}

impl CourtOrderDisplay for CourtOrderEditor {
    fn render(&self) -> Vec<RenderedElement> {
        CourtOrderField::ALL
            .into_iter()
            .map(|field| {
                let raw = field.read(&self.info);
                let messages = self.validation(field).visible_messages(self.show_errors);
                let kind = match field {
                    CourtOrderField::OrderDate => ElementKind::DateInput {
                        value: raw.to_string(),
                        messages,
                    },
                    CourtOrderField::EffectOfOrder => ElementKind::TextArea {
                        value: raw.to_string(),
                        messages,
                    },
                    _ => ElementKind::TextInput {
                        value: raw.to_string(),
                        messages,
                    },
                };
                RenderedElement {
                    id: field.input_id(),
                    label: field.label(),
                    kind,
                }
            })
            .collect()
    }

    fn is_summary(&self) -> bool {
        false
    }

    fn as_editor(&self) -> Option<&CourtOrderEditor> {
        Some(self)
    }

    fn as_editor_mut(&mut self) -> Option<&mut CourtOrderEditor> {
        Some(self)
    }
}
