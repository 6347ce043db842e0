//! Declarative field validation.
//!
//! Schemas are static slices of [`rules::FieldRule`]; the pure-logic
//! [`evaluator`] checks every rule against a raw JSON object and reports all
//! failing fields at once.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate_rules, validate};
pub use rules::{FieldRule, FieldViolation, RuleKind, ValidationErrors};
