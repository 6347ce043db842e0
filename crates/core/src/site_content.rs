//! Editable landing-page content: defaults and validation.
//!
//! The site has exactly one content record. When none has been saved the
//! landing page falls back to [`SiteContentFields::default`].

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::validation::rules::{FieldRule, RuleKind, ValidationErrors};
use crate::validation::evaluate_rules;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_TEXT_LENGTH: usize = 500;
pub const MAX_STORY_LENGTH: usize = 10_000;

/// The editable content fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContentFields {
    pub hero_title: String,
    pub hero_subtitle: String,
    /// `YYYY-MM-DD`
    pub wedding_date: String,
    /// `HH:MM`, 24-hour.
    pub wedding_time: String,
    pub venue_name: String,
    pub venue_address: String,
    /// `"lat,lng"` in decimal degrees.
    pub venue_coordinates: String,
    pub couple_story: String,
    pub gift_account_name: String,
    pub gift_account_number: String,
    pub gift_bank_name: String,
}

impl Default for SiteContentFields {
    fn default() -> Self {
        Self {
            hero_title: "Our Wedding".into(),
            hero_subtitle: "Join us for our special day".into(),
            wedding_date: "2026-05-06".into(),
            wedding_time: "16:00".into(),
            venue_name: "Beautiful Garden Venue".into(),
            venue_address: "123 Wedding Street, Love City".into(),
            venue_coordinates: "37.7749,-122.4194".into(),
            couple_story: "Our love story begins...".into(),
            gift_account_name: "Wedding Gift Account".into(),
            gift_account_number: "1234567890".into(),
            gift_bank_name: "Love Bank".into(),
        }
    }
}

const fn required(field: &'static str, message: &'static str) -> FieldRule {
    FieldRule::new(field, RuleKind::Required, message)
}

const fn max(field: &'static str, n: usize) -> FieldRule {
    FieldRule::new(field, RuleKind::MaxLength(n), "Value is too long")
}

pub const SITE_CONTENT_RULES: &[FieldRule] = &[
    required("hero_title", "Hero title is required"),
    max("hero_title", MAX_TITLE_LENGTH),
    max("hero_subtitle", MAX_TEXT_LENGTH),
    required("wedding_date", "Wedding date is required"),
    required("wedding_time", "Wedding time is required"),
    required("venue_name", "Venue name is required"),
    max("venue_name", MAX_TITLE_LENGTH),
    required("venue_address", "Venue address is required"),
    max("venue_address", MAX_TEXT_LENGTH),
    max("venue_coordinates", 64),
    max("couple_story", MAX_STORY_LENGTH),
    max("gift_account_name", MAX_TITLE_LENGTH),
    max("gift_account_number", 64),
    max("gift_bank_name", MAX_TITLE_LENGTH),
];

/// Parse `"lat,lng"` into a coordinate pair within valid ranges.
pub fn parse_coordinates(raw: &str) -> Option<(f64, f64)> {
    let (lat, lng) = raw.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)).then_some((lat, lng))
}

/// Validate submitted content, trimming every field.
pub fn validate_site_content(input: &SiteContentFields) -> Result<SiteContentFields, CoreError> {
    let trimmed = SiteContentFields {
        hero_title: input.hero_title.trim().to_string(),
        hero_subtitle: input.hero_subtitle.trim().to_string(),
        wedding_date: input.wedding_date.trim().to_string(),
        wedding_time: input.wedding_time.trim().to_string(),
        venue_name: input.venue_name.trim().to_string(),
        venue_address: input.venue_address.trim().to_string(),
        venue_coordinates: input.venue_coordinates.trim().to_string(),
        couple_story: input.couple_story.trim().to_string(),
        gift_account_name: input.gift_account_name.trim().to_string(),
        gift_account_number: input.gift_account_number.trim().to_string(),
        gift_bank_name: input.gift_bank_name.trim().to_string(),
    };

    let as_map: Map<String, Value> = match serde_json::to_value(&trimmed) {
        Ok(Value::Object(map)) => map,
        _ => return Err(CoreError::Internal("site content did not serialize to an object".into())),
    };

    let mut errors: ValidationErrors = evaluate_rules(SITE_CONTENT_RULES, &as_map)
        .into_iter()
        .collect();

    if !trimmed.wedding_date.is_empty()
        && NaiveDate::parse_from_str(&trimmed.wedding_date, "%Y-%m-%d").is_err()
    {
        errors.add("wedding_date", "Wedding date must be YYYY-MM-DD");
    }
    if !trimmed.wedding_time.is_empty()
        && NaiveTime::parse_from_str(&trimmed.wedding_time, "%H:%M").is_err()
    {
        errors.add("wedding_time", "Wedding time must be HH:MM");
    }
    if !trimmed.venue_coordinates.is_empty()
        && parse_coordinates(&trimmed.venue_coordinates).is_none()
    {
        errors.add(
            "venue_coordinates",
            "Coordinates must be \"lat,lng\" in decimal degrees",
        );
    }

    errors.into_result().map_err(CoreError::InvalidFields)?;
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_are_valid() {
        let content = SiteContentFields::default();
        assert_eq!(validate_site_content(&content).unwrap(), content);
    }

    #[test]
    fn fields_are_trimmed() {
        let content = SiteContentFields {
            venue_name: "  The Barn  ".into(),
            ..Default::default()
        };
        assert_eq!(validate_site_content(&content).unwrap().venue_name, "The Barn");
    }

    #[test]
    fn malformed_date_time_and_coordinates_are_reported() {
        let content = SiteContentFields {
            wedding_date: "06/05/2026".into(),
            wedding_time: "4pm".into(),
            venue_coordinates: "91,0".into(),
            hero_title: " ".into(),
            ..Default::default()
        };
        let err = validate_site_content(&content).unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref e) => {
            assert_eq!(
                e.field_names(),
                vec!["hero_title", "venue_coordinates", "wedding_date", "wedding_time"]
            );
        });
    }

    #[test]
    fn coordinates_parse_within_range() {
        assert_eq!(parse_coordinates("37.7749, -122.4194"), Some((37.7749, -122.4194)));
        assert_eq!(parse_coordinates("0,181"), None);
        assert_eq!(parse_coordinates("north"), None);
    }
}
