//! RSVP response schema: attendance values, validation rules, and the
//! conversion from raw form input to an insertable payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::validation::evaluator::{integer_field, text_field};
use crate::validation::rules::{FieldRule, RuleKind};
use crate::validation::validate;

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

pub const ATTENDING: &str = "attending";
pub const NOT_ATTENDING: &str = "not-attending";

/// All valid attendance values.
pub const ATTENDANCE_VALUES: &[&str] = &[ATTENDING, NOT_ATTENDING];

/// Whether the guest will be at the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attendance {
    Attending,
    NotAttending,
}

impl Attendance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::Attending => ATTENDING,
            Attendance::NotAttending => NOT_ATTENDING,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            ATTENDING => Some(Attendance::Attending),
            NOT_ATTENDING => Some(Attendance::NotAttending),
            _ => None,
        }
    }
}

impl std::fmt::Display for Attendance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Additional guests a single RSVP may bring.
pub const MAX_GUEST_COUNT: i64 = 4;

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_PHONE_LENGTH: usize = 30;
pub const MAX_DIETARY_LENGTH: usize = 500;
pub const MAX_MESSAGE_LENGTH: usize = 2_000;

/// Field rules for the public RSVP form (camelCase keys, as submitted).
pub const RSVP_RULES: &[FieldRule] = &[
    FieldRule::new("fullName", RuleKind::Required, "Please enter your full name"),
    FieldRule::new(
        "fullName",
        RuleKind::MinLength(2),
        "Name must be at least 2 characters",
    ),
    FieldRule::new(
        "fullName",
        RuleKind::MaxLength(MAX_NAME_LENGTH),
        "Name is too long",
    ),
    FieldRule::new("email", RuleKind::Required, "Please enter your email"),
    FieldRule::new("email", RuleKind::Email, "Please enter a valid email"),
    FieldRule::new("phone", RuleKind::Required, "Please enter your phone number"),
    FieldRule::new(
        "phone",
        RuleKind::MinLength(10),
        "Please enter a valid phone number",
    ),
    FieldRule::new(
        "phone",
        RuleKind::MaxLength(MAX_PHONE_LENGTH),
        "Phone number is too long",
    ),
    FieldRule::new(
        "attendance",
        RuleKind::Required,
        "Please select your attendance",
    ),
    FieldRule::new(
        "attendance",
        RuleKind::OneOf(ATTENDANCE_VALUES),
        "Please select your attendance",
    ),
    FieldRule::new(
        "guestCount",
        RuleKind::Required,
        "Please select number of guests",
    )
    .when("attendance", ATTENDING),
    FieldRule::new(
        "guestCount",
        RuleKind::IntegerRange {
            min: 0,
            max: MAX_GUEST_COUNT,
        },
        "Number of guests must be between 0 and 4",
    ),
    FieldRule::new(
        "dietaryRestrictions",
        RuleKind::MaxLength(MAX_DIETARY_LENGTH),
        "Dietary restrictions are too long",
    ),
    FieldRule::new(
        "message",
        RuleKind::MaxLength(MAX_MESSAGE_LENGTH),
        "Message is too long",
    ),
];

/// A validated RSVP ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRsvpResponse {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub attendance: Attendance,
    /// Additional guests; always 0 when not attending.
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
}

/// Validate raw form input and build the insert payload.
///
/// Every failing field is reported in a single [`CoreError::InvalidFields`].
pub fn parse_rsvp(input: &Map<String, Value>) -> Result<NewRsvpResponse, CoreError> {
    validate(RSVP_RULES, input).map_err(CoreError::InvalidFields)?;

    let attendance = text_field(input, "attendance")
        .as_deref()
        .and_then(Attendance::parse)
        .ok_or_else(|| CoreError::Internal("attendance passed validation but did not parse".into()))?;

    let guest_count = match attendance {
        Attendance::Attending => integer_field(input, "guestCount").unwrap_or(0),
        Attendance::NotAttending => 0,
    };

    Ok(NewRsvpResponse {
        full_name: text_field(input, "fullName").unwrap_or_default(),
        email: text_field(input, "email").unwrap_or_default(),
        phone: text_field(input, "phone").unwrap_or_default(),
        attendance,
        // Bounded by MAX_GUEST_COUNT above.
        guest_count: guest_count as i32,
        dietary_restrictions: match attendance {
            Attendance::Attending => text_field(input, "dietaryRestrictions"),
            Attendance::NotAttending => None,
        },
        message: text_field(input, "message"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
