//! Guestbook message schema.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::validation::evaluator::text_field;
use crate::validation::rules::{FieldRule, RuleKind};
use crate::validation::validate;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_MESSAGE_LENGTH: usize = 2_000;

pub const GUESTBOOK_RULES: &[FieldRule] = &[
    FieldRule::new("name", RuleKind::Required, "Please enter your name"),
    FieldRule::new(
        "name",
        RuleKind::MinLength(2),
        "Name must be at least 2 characters",
    ),
    FieldRule::new("name", RuleKind::MaxLength(MAX_NAME_LENGTH), "Name is too long"),
    FieldRule::new("message", RuleKind::Required, "Please write a message"),
    FieldRule::new(
        "message",
        RuleKind::MinLength(10),
        "Message must be at least 10 characters",
    ),
    FieldRule::new(
        "message",
        RuleKind::MaxLength(MAX_MESSAGE_LENGTH),
        "Message is too long",
    ),
];

/// A validated guestbook entry ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGuestbookMessage {
    pub name: String,
    pub message: String,
}

pub fn parse_guestbook_message(
    input: &Map<String, Value>,
) -> Result<NewGuestbookMessage, CoreError> {
    validate(GUESTBOOK_RULES, input).map_err(CoreError::InvalidFields)?;
    Ok(NewGuestbookMessage {
        name: text_field(input, "name").unwrap_or_default(),
        message: text_field(input, "message").unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn input(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn accepts_and_trims_valid_message() {
        let msg = parse_guestbook_message(&input(json!({
            "name": "  Emily ",
            "message": "Wishing you a lifetime of happiness!"
        })))
        .unwrap();
        assert_eq!(msg.name, "Emily");
        assert_eq!(msg.message, "Wishing you a lifetime of happiness!");
    }

    #[test]
    fn short_name_and_message_both_reported() {
        let err = parse_guestbook_message(&input(json!({"name": "E", "message": "hi"})))
            .unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref e) => {
            assert_eq!(e.field_names(), vec!["message", "name"]);
        });
    }

    #[test]
    fn missing_fields_are_required() {
        let err = parse_guestbook_message(&input(json!({}))).unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref e) => {
            assert_eq!(e.messages_for("name"), ["Please enter your name".to_string()]);
        });
    }
}
