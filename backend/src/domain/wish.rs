//! Wish data model and validation.
//!
//! A wish is one form submission: contact details, free text, and an
//! optional photo persisted separately. Records are append-only and never
//! mutated after insertion.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// A stored wish record.
///
/// `user_photo_path` is set if and only if a photo payload was decoded and
/// written during submission. `temp_image_path` is an opaque client-supplied
/// string, stored verbatim and never resolved against the filesystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Wish {
    /// Unique identifier assigned at insert time.
    pub id: Uuid,
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address.
    pub email: String,
    /// Submitter's phone number (ten decimal digits).
    pub phone_number: String,
    /// Free-text body of the wish.
    pub input_text: String,
    /// Optional free-form gender.
    pub gender: Option<String>,
    /// Opaque client-supplied path string, echoed verbatim.
    pub temp_image_path: Option<String>,
    /// Path of the persisted photo file, if a photo was submitted.
    pub user_photo_path: Option<String>,
    /// Server-assigned creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Deserialise a candidate text field leniently: any non-string JSON value
/// is treated as absent so it fails validation as a missing field rather
/// than as a framework-worded deserialisation error.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// An unvalidated wish submission as received from a client.
///
/// `user_photo_path` carries the base64 photo payload on submission despite
/// its name; the stored record's field of the same name holds the persisted
/// file path instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WishSubmission {
    /// Submitter's name (required).
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Submitter's email address (required).
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    /// Submitter's phone number (required, ten decimal digits).
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,
    /// Free-text body of the wish (required).
    #[serde(default, deserialize_with = "lenient_string")]
    pub input_text: Option<String>,
    /// Optional free-form gender.
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    /// Opaque client-supplied path string.
    #[serde(default, deserialize_with = "lenient_string")]
    pub temp_image_path: Option<String>,
    /// Optional base64 photo payload, optionally prefixed with a
    /// `data:image/<subtype>;base64,` marker.
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_photo_path: Option<String>,
}

/// Validation failures for a wish submission, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishValidationError {
    /// A required text field is absent, empty, or not a text value.
    MissingField,
    /// The email does not match the `local@domain.tld` shape.
    InvalidEmail,
    /// The phone number is not exactly ten decimal digits.
    InvalidPhoneNumber,
}

impl fmt::Display for WishValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "Missing required fields"),
            Self::InvalidEmail => write!(f, "Invalid email format"),
            Self::InvalidPhoneNumber => write!(f, "Invalid phone number"),
        }
    }
}

impl std::error::Error for WishValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local@domain.tld with no whitespace and a single @; no further
        // domain validation and no length limits.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        // ASCII digits only; the regex crate's \d would admit Unicode digits.
        let pattern = r"^[0-9]{10}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// A submission whose required fields are proven present and well-formed.
///
/// Produced by the pure validator ([`TryFrom<WishSubmission>`]); checks
/// short-circuit in order: missing fields, then email shape, then phone
/// shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidWish {
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address.
    pub email: String,
    /// Submitter's phone number.
    pub phone_number: String,
    /// Free-text body of the wish.
    pub input_text: String,
    /// Optional free-form gender.
    pub gender: Option<String>,
    /// Opaque client-supplied path string.
    pub temp_image_path: Option<String>,
    /// Base64 photo payload awaiting decode, if one was submitted.
    pub photo_payload: Option<String>,
}

fn required(field: Option<String>) -> Result<String, WishValidationError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(WishValidationError::MissingField),
    }
}

impl TryFrom<WishSubmission> for ValidWish {
    type Error = WishValidationError;

    fn try_from(submission: WishSubmission) -> Result<Self, Self::Error> {
        let name = required(submission.name)?;
        let email = required(submission.email)?;
        let phone_number = required(submission.phone_number)?;
        let input_text = required(submission.input_text)?;

        if !email_regex().is_match(&email) {
            return Err(WishValidationError::InvalidEmail);
        }
        if !phone_regex().is_match(&phone_number) {
            return Err(WishValidationError::InvalidPhoneNumber);
        }

        Ok(Self {
            name,
            email,
            phone_number,
            input_text,
            gender: submission.gender,
            temp_image_path: submission.temp_image_path,
            photo_payload: submission.user_photo_path,
        })
    }
}

/// Filter criteria for scanning stored wishes.
///
/// All supplied criteria must hold (logical AND); absent criteria impose no
/// constraint. Doubles as the query-string contract for `GET /submit-wish`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct WishFilter {
    /// Case-insensitive substring match on the name.
    pub name: Option<String>,
    /// Case-insensitive substring match on the email.
    pub email: Option<String>,
    /// Case-sensitive substring match on the phone number.
    pub phone_number: Option<String>,
    /// Case-insensitive substring match on the wish text.
    pub input_text: Option<String>,
    /// Case-insensitive substring match on the gender.
    pub gender: Option<String>,
    /// Exact match on the client-supplied path string.
    pub temp_image_path: Option<String>,
    /// Exact match on the persisted photo path.
    pub user_photo_path: Option<String>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A criterion against an unset optional field matches nothing.
fn opt_contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|value| contains_ci(value, needle))
}

impl WishFilter {
    /// Return whether a wish satisfies every supplied criterion.
    pub fn matches(&self, wish: &Wish) -> bool {
        let substring_criteria_hold = self
            .name
            .as_deref()
            .is_none_or(|needle| contains_ci(&wish.name, needle))
            && self
                .email
                .as_deref()
                .is_none_or(|needle| contains_ci(&wish.email, needle))
            && self
                .phone_number
                .as_deref()
                .is_none_or(|needle| wish.phone_number.contains(needle))
            && self
                .input_text
                .as_deref()
                .is_none_or(|needle| contains_ci(&wish.input_text, needle))
            && self
                .gender
                .as_deref()
                .is_none_or(|needle| opt_contains_ci(wish.gender.as_deref(), needle));

        substring_criteria_hold
            && self
                .temp_image_path
                .as_deref()
                .is_none_or(|expected| wish.temp_image_path.as_deref() == Some(expected))
            && self
                .user_photo_path
                .as_deref()
                .is_none_or(|expected| wish.user_photo_path.as_deref() == Some(expected))
    }
}

#[cfg(test)]
#[path = "wish_tests.rs"]
mod tests;
