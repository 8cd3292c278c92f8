//! Per-field rules for the court order form.

use mhr_shared::{domain::CourtOrderInfo, error::FieldError};

use super::field::CourtOrderField;

pub fn max_length_message(max: usize) -> String {
    format!("Maximum {max} characters")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub field: CourtOrderField,
    pub length_exceeded: bool,
    pub blank_required: bool,
}

impl FieldValidation {
    pub fn is_valid(&self) -> bool {
        !self.length_exceeded && !self.blank_required
    }

    /// Length hints always show; blank-required hints only after the parent asks for them.
    pub fn visible_messages(&self, show_errors: bool) -> Vec<String> {
        let mut messages = Vec::new();
        if self.length_exceeded {
            if let Some(max) = self.field.max_length() {
                messages.push(max_length_message(max));
            }
        }
        if self.blank_required && show_errors {
            if let Some(required) = self.field.required_message() {
                messages.push(required.to_string());
            }
        }
        messages
    }
}

pub fn validate_field(field: CourtOrderField, value: &str) -> FieldValidation {
    let length_exceeded = field
        .max_length()
        .is_some_and(|max| value.chars().count() > max);
    let blank_required = field.required_message().is_some() && value.trim().is_empty();

    FieldValidation {
        field,
        length_exceeded,
        blank_required,
    }
}

pub fn validate_court_order(info: &CourtOrderInfo) -> Vec<FieldValidation> {
    CourtOrderField::ALL
        .into_iter()
        .map(|field| validate_field(field, field.read(info)))
        .collect()
}

pub fn collect_field_errors(validations: &[FieldValidation], show_errors: bool) -> Vec<FieldError> {
    validations
        .iter()
        .flat_map(|validation| {
            validation
                .visible_messages(show_errors)
                .into_iter()
                .map(|message| FieldError::new(validation.field.key(), message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_limit_is_inclusive() {
        assert!(validate_field(CourtOrderField::FileNumber, &"x".repeat(20)).is_valid());

        let too_long = validate_field(CourtOrderField::FileNumber, &"x".repeat(21));
        assert!(too_long.length_exceeded);
        assert_eq!(too_long.visible_messages(false), vec!["Maximum 20 characters"]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let accented = "é".repeat(64);
        assert!(validate_field(CourtOrderField::CourtRegistry, &accented).is_valid());
    }

    #[test]
    fn whitespace_only_required_field_is_blank() {
        let blank = validate_field(CourtOrderField::CourtName, " \t ");
        assert!(blank.blank_required);
        assert!(!blank.is_valid());
        assert!(blank.visible_messages(false).is_empty());
        assert_eq!(blank.visible_messages(true), vec!["Enter the court name"]);
    }

    #[test]
    fn effect_of_order_is_optional() {
        assert!(validate_field(CourtOrderField::EffectOfOrder, "").is_valid());
        assert!(!validate_field(CourtOrderField::EffectOfOrder, &"x".repeat(513)).is_valid());
    }

    #[test]
    fn order_date_has_no_length_bound() {
        assert!(validate_field(CourtOrderField::OrderDate, &"9".repeat(1000)).is_valid());
        assert!(!validate_field(CourtOrderField::OrderDate, "").is_valid());
    }

    #[test]
    fn field_errors_are_keyed_in_form_order() {
        let info = CourtOrderInfo {
            court_name: "x".repeat(257),
            court_registry: String::new(),
            order_date: "2021-10-07".into(),
            file_number: "DEF".into(),
            effect_of_order: "x".repeat(513),
        };
        let errors = collect_field_errors(&validate_court_order(&info), true);
        assert_eq!(
            errors,
            vec![
                FieldError::new("courtName", "Maximum 256 characters"),
                FieldError::new("courtRegistry", "Enter the court registry"),
                FieldError::new("effectOfOrder", "Maximum 512 characters"),
            ]
        );
    }
}
