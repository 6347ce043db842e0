//! Admin console account input.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::roles::{DEFAULT_ROLE, VALID_ROLES};
use crate::validation::evaluator::text_field;
use crate::validation::rules::{FieldRule, RuleKind};
use crate::validation::validate;

/// Minimum password length for console accounts.
pub const MIN_PASSWORD_LENGTH: usize = 12;

pub const ACCOUNT_RULES: &[FieldRule] = &[
    FieldRule::new("email", RuleKind::Required, "Email is required"),
    FieldRule::new("email", RuleKind::Email, "Please enter a valid email"),
    FieldRule::new("password", RuleKind::Required, "Password is required"),
    FieldRule::new(
        "password",
        RuleKind::MinLength(MIN_PASSWORD_LENGTH),
        "Password must be at least 12 characters long",
    ),
    FieldRule::new("role", RuleKind::OneOf(VALID_ROLES), "Unknown role"),
];

/// A validated request to create a console account. The password is still
/// plaintext; hashing happens in the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Lowercased and trimmed.
    pub email: String,
    pub password: String,
    pub role: String,
}

pub fn parse_new_account(input: &Map<String, Value>) -> Result<NewAccount, CoreError> {
    validate(ACCOUNT_RULES, input).map_err(CoreError::InvalidFields)?;
    Ok(NewAccount {
        email: text_field(input, "email").unwrap_or_default().to_lowercase(),
        // Passwords are taken verbatim, surrounding whitespace included.
        password: input
            .get("password")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        role: text_field(input, "role").unwrap_or_else(|| DEFAULT_ROLE.to_string()),
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
    fn role_defaults_to_user() {
        let account = parse_new_account(&input(json!({
            "email": " Clara@Example.com ",
            "password": "impossible-girl",
        })))
        .unwrap();
        assert_eq!(account.email, "clara@example.com");
        assert_eq!(account.role, "user");
    }

    #[test]
    fn reports_every_bad_field() {
        let err = parse_new_account(&input(json!({
            "email": "nope",
            "password": "short",
            "role": "owner",
        })))
        .unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(errors) => {
            assert_eq!(errors.field_names(), vec!["email", "password", "role"]);
        });
    }
}
