//! Rule evaluator. Pure logic, no database access.

use serde_json::{Map, Value};
use validator::ValidateEmail;

use super::rules::{Condition, FieldRule, FieldViolation, RuleKind, ValidationErrors};

/// Evaluate every rule against one raw record, returning all violations.
pub fn evaluate_rules(rules: &[FieldRule], data: &Map<String, Value>) -> Vec<FieldViolation> {
    rules
        .iter()
        .filter(|rule| condition_holds(rule.when, data))
        .filter_map(|rule| evaluate_single_rule(rule, data.get(rule.field)))
        .collect()
}

/// Evaluate `rules` and group any violations by field.
pub fn validate(rules: &[FieldRule], data: &Map<String, Value>) -> Result<(), ValidationErrors> {
    evaluate_rules(rules, data)
        .into_iter()
        .collect::<ValidationErrors>()
        .into_result()
}

/// Read a string field, trimmed. Blank strings read as `None`.
pub fn text_field(data: &Map<String, Value>, field: &str) -> Option<String> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Read an integer field given either as a JSON number or a numeric string.
pub fn integer_field(data: &Map<String, Value>, field: &str) -> Option<i64> {
    data.get(field).and_then(as_integer)
}

fn condition_holds(when: Option<Condition>, data: &Map<String, Value>) -> bool {
    match when {
        None => true,
        Some(cond) => data
            .get(cond.field)
            .and_then(Value::as_str)
            .is_some_and(|v| v.trim() == cond.equals),
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn violation(rule: &FieldRule) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        rule_type: rule.kind.name(),
        message: rule.message.to_string(),
    }
}

fn evaluate_single_rule(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    if is_blank(value) {
        // Absent optional fields only fail `Required`.
        return (rule.kind == RuleKind::Required).then(|| violation(rule));
    }
    let value = value?;

    let passes = match rule.kind {
        RuleKind::Required => true,
        RuleKind::MinLength(min) => text_len(value).is_some_and(|len| len >= min),
        RuleKind::MaxLength(max) => text_len(value).is_some_and(|len| len <= max),
        RuleKind::Email => value
            .as_str()
            .is_some_and(|s| s.trim().validate_email()),
        RuleKind::OneOf(allowed) => value
            .as_str()
            .is_some_and(|s| allowed.contains(&s.trim())),
        RuleKind::IntegerRange { min, max } => {
            as_integer(value).is_some_and(|n| (min..=max).contains(&n))
        }
    };

    if passes {
        None
    } else {
        Some(violation(rule))
    }
}

fn text_len(value: &Value) -> Option<usize> {
    value.as_str().map(|s| s.trim().chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    const FIELD: &str = "test_field";

    fn rule(kind: RuleKind) -> FieldRule {
        FieldRule::new(FIELD, kind, "failed")
    }

    #[test]
    fn required_passes_with_value() {
        let result = evaluate_rules(&[rule(RuleKind::Required)], &data(json!({FIELD: "hi"})));
        assert!(result.is_empty());
    }

    #[test]
    fn required_fails_missing_null_and_blank() {
        let rules = [rule(RuleKind::Required)];
        for input in [json!({}), json!({FIELD: null}), json!({FIELD: "   "})] {
            let result = evaluate_rules(&rules, &data(input));
            assert_eq!(result.len(), 1);
            assert_eq!(result[0].rule_type, "required");
        }
    }

    #[test]
    fn optional_blank_skips_other_rules() {
        let rules = [rule(RuleKind::MinLength(5)), rule(RuleKind::Email)];
        assert!(evaluate_rules(&rules, &data(json!({}))).is_empty());
        assert!(evaluate_rules(&rules, &data(json!({FIELD: ""}))).is_empty());
    }

    #[test]
    fn min_length_counts_trimmed_characters() {
        let rules = [rule(RuleKind::MinLength(2))];
        assert!(evaluate_rules(&rules, &data(json!({FIELD: "Al"}))).is_empty());
        assert!(evaluate_rules(&rules, &data(json!({FIELD: "Zoë"}))).is_empty());
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: " A "}))).len(), 1);
    }

    #[test]
    fn max_length_fails_over_limit() {
        let rules = [rule(RuleKind::MaxLength(3))];
        assert!(evaluate_rules(&rules, &data(json!({FIELD: "abc"}))).is_empty());
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: "abcd"}))).len(), 1);
    }

    #[test]
    fn length_rules_reject_non_strings() {
        let rules = [rule(RuleKind::MinLength(1))];
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: 42}))).len(), 1);
    }

    #[test]
    fn email_syntax() {
        let rules = [rule(RuleKind::Email)];
        assert!(evaluate_rules(&rules, &data(json!({FIELD: "amy@example.com"}))).is_empty());
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: "bad"}))).len(), 1);
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: "a@"}))).len(), 1);
    }

    #[test]
    fn one_of_membership() {
        let rules = [rule(RuleKind::OneOf(&["a", "b"]))];
        assert!(evaluate_rules(&rules, &data(json!({FIELD: "b"}))).is_empty());
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: "c"}))).len(), 1);
    }

    #[test]
    fn integer_range_accepts_numbers_and_numeric_strings() {
        let rules = [rule(RuleKind::IntegerRange { min: 0, max: 4 })];
        assert!(evaluate_rules(&rules, &data(json!({FIELD: 2}))).is_empty());
        assert!(evaluate_rules(&rules, &data(json!({FIELD: "2"}))).is_empty());
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: 5}))).len(), 1);
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: "-1"}))).len(), 1);
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: "two"}))).len(), 1);
        assert_eq!(evaluate_rules(&rules, &data(json!({FIELD: 1.5}))).len(), 1);
    }

    #[test]
    fn conditional_rule_only_applies_when_condition_holds() {
        let rules = [rule(RuleKind::Required).when("mode", "on")];
        assert!(evaluate_rules(&rules, &data(json!({"mode": "off"}))).is_empty());
        assert!(evaluate_rules(&rules, &data(json!({}))).is_empty());
        assert_eq!(evaluate_rules(&rules, &data(json!({"mode": "on"}))).len(), 1);
    }

    #[test]
    fn all_failing_fields_are_reported() {
        let rules = [
            FieldRule::new("a", RuleKind::Required, "a required"),
            FieldRule::new("b", RuleKind::Email, "b email"),
            FieldRule::new("c", RuleKind::MinLength(3), "c short"),
        ];
        let errors = validate(&rules, &data(json!({"b": "nope", "c": "xy"}))).unwrap_err();
        assert_eq!(errors.field_names(), vec!["a", "b", "c"]);
        assert_eq!(errors.messages_for("b"), ["b email".to_string()]);
    }

    #[test]
    fn field_readers_trim_and_parse() {
        let d = data(json!({"s": "  hi  ", "blank": " ", "n": "3", "m": 4}));
        assert_eq!(text_field(&d, "s").as_deref(), Some("hi"));
        assert_eq!(text_field(&d, "blank"), None);
        assert_eq!(integer_field(&d, "n"), Some(3));
        assert_eq!(integer_field(&d, "m"), Some(4));
        assert_eq!(integer_field(&d, "missing"), None);
    }
}
