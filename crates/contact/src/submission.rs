use serde_json::Value;
use strum::{AsRefStr, Display, VariantArray};

use crate::{Error, Result};

/// Longest value kept for any single form field, in characters.
pub const MAX_FIELD_LEN: usize = 500;

/// Normalizes one raw payload value.
///
/// Anything that is not a JSON string becomes empty. Strings are trimmed,
/// then cut to their first [`MAX_FIELD_LEN`] characters. Whitespace exposed
/// by the cut is kept.
pub fn sanitize(value: Option<&Value>) -> String {
    let Some(Value::String(value)) = value else {
        return String::new();
    };

    value.trim().chars().take(MAX_FIELD_LEN).collect()
}

/// Fields a quote request cannot go out without, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, VariantArray)]
#[strum(serialize_all = "camelCase")]
pub enum RequiredField {
    Email,
    Phone,
    Date,
    City,
    GuestCount,
    EventType,
    Hours,
    VibeTheme,
    AlcoholPreference,
}

pub const HONEYPOT_FIELD: &str = "website";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub city: String,
    pub guest_count: String,
    pub event_type: String,
    pub hours: String,
    pub vibe_theme: String,
    pub alcohol_preference: String,
    pub website: String,
}

impl Submission {
    /// Builds a sanitized submission from a decoded request body. Non-object
    /// bodies, `null` included, yield an all-empty submission.
    pub fn from_json(body: &Value) -> Self {
        let field = |key: &str| sanitize(body.get(key));

        Self {
            name: field("name"),
            email: field(RequiredField::Email.as_ref()),
            phone: field(RequiredField::Phone.as_ref()),
            date: field(RequiredField::Date.as_ref()),
            city: field(RequiredField::City.as_ref()),
            guest_count: field(RequiredField::GuestCount.as_ref()),
            event_type: field(RequiredField::EventType.as_ref()),
            hours: field(RequiredField::Hours.as_ref()),
            vibe_theme: field(RequiredField::VibeTheme.as_ref()),
            alcohol_preference: field(RequiredField::AlcoholPreference.as_ref()),
            website: field(HONEYPOT_FIELD),
        }
    }

    pub fn field(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Email => &self.email,
            RequiredField::Phone => &self.phone,
            RequiredField::Date => &self.date,
            RequiredField::City => &self.city,
            RequiredField::GuestCount => &self.guest_count,
            RequiredField::EventType => &self.event_type,
            RequiredField::Hours => &self.hours,
            RequiredField::VibeTheme => &self.vibe_theme,
            RequiredField::AlcoholPreference => &self.alcohol_preference,
        }
    }

    pub fn is_spam(&self) -> bool {
        !self.website.is_empty()
    }

    pub fn first_missing(&self) -> Option<RequiredField> {
        RequiredField::VARIANTS
            .iter()
            .copied()
            .find(|field| self.field(*field).is_empty())
    }

    /// Fails on the first empty required field only.
    pub fn validate(&self) -> Result<()> {
        match self.first_missing() {
            Some(field) => Err(Error::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// Honeypot check on the raw body, before the rest is sanitized.
pub fn is_honeypot_filled(body: &Value) -> bool {
    !sanitize(body.get(HONEYPOT_FIELD)).is_empty()
}
