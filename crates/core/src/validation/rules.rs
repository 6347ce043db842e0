//! Validation rule and result types.

use std::collections::BTreeMap;

use serde::Serialize;

/// The constraint a rule applies to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Present, non-null, and not blank.
    Required,
    /// At least `n` characters after trimming.
    MinLength(usize),
    /// At most `n` characters after trimming.
    MaxLength(usize),
    /// Syntactically valid email address.
    Email,
    /// One of a fixed set of string values.
    OneOf(&'static [&'static str]),
    /// Whole number (JSON integer or numeric string) within `min..=max`.
    IntegerRange { min: i64, max: i64 },
}

impl RuleKind {
    /// Short machine-readable name, reported alongside each violation.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MinLength(_) => "min_length",
            RuleKind::MaxLength(_) => "max_length",
            RuleKind::Email => "email",
            RuleKind::OneOf(_) => "one_of",
            RuleKind::IntegerRange { .. } => "integer_range",
        }
    }
}

/// Restricts a rule to records where another field has a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub field: &'static str,
    pub equals: &'static str,
}

/// A single declarative constraint on one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
    pub when: Option<Condition>,
}

impl FieldRule {
    pub const fn new(field: &'static str, kind: RuleKind, message: &'static str) -> Self {
        Self {
            field,
            kind,
            message,
            when: None,
        }
    }

    /// Only apply this rule when `field` equals `equals`.
    pub const fn when(mut self, field: &'static str, equals: &'static str) -> Self {
        self.when = Some(Condition { field, equals });
        self
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: &'static str,
    pub message: String,
}

/// All violations of one record, grouped by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages reported for `field`, empty if the field passed.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Failing field names in sorted order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl FromIterator<FieldViolation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        let mut errors = ValidationErrors::new();
        for violation in iter {
            errors.add(violation.field, violation.message);
        }
        errors
    }
}
