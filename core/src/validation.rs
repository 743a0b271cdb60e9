//! Field-level validation rules shared by the value objects.
//!
//! # Design
//! Every constructor in `types` runs its rules in field-declaration order and
//! returns the first `ValidationError` it hits. Errors are never aggregated:
//! one rejected input, one message naming the field and the rule it broke.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

/// A value object rejected one of its inputs.
///
/// `Display` yields the human-readable message only, e.g.
/// `Email address must be lowercase: USER@DOMAIN.COM`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Name of the rejected field, e.g. `"customer.email"`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

static COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("country code pattern compiles"));

static LOCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}_[A-Z]{2}$").expect("locale pattern compiles"));

static E164_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{7,15}$").expect("phone pattern compiles"));

static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid pattern compiles")
});

// Dot-atom local part, hostname-style domain with at least one dot.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    ))
    .expect("email pattern compiles")
});

const MAX_EMAIL_LOCAL_PART: usize = 64;
const MAX_EMAIL_LENGTH: usize = 320;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in Unicode scalar values, not bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn is_country_code(value: &str) -> bool {
    COUNTRY_CODE.is_match(value)
}

pub(crate) fn is_locale(value: &str) -> bool {
    LOCALE.is_match(value)
}

pub(crate) fn is_e164_phone(value: &str) -> bool {
    E164_PHONE.is_match(value)
}

pub(crate) fn is_uuid_v4(value: &str) -> bool {
    UUID_V4.is_match(value)
}

pub(crate) fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    local.len() <= MAX_EMAIL_LOCAL_PART && value.len() <= MAX_EMAIL_LENGTH && EMAIL.is_match(value)
}

/// Absolute URL with a scheme and a non-empty host.
///
/// The `url` crate quietly percent-encodes embedded whitespace, so raw
/// whitespace and control characters are rejected up front.
pub(crate) fn is_absolute_url(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    match Url::parse(value) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Like `is_absolute_url`, additionally restricted to `http`/`https`.
pub(crate) fn is_http_url(value: &str) -> bool {
    is_absolute_url(value)
        && Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Rejects blank values and values longer than `max` characters.
pub(crate) fn bounded_text(
    field: &'static str,
    label: &str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new(field, format!("{label} cannot be empty")));
    }
    if char_len(value) > max {
        return Err(ValidationError::new(
            field,
            format!("{label} cannot exceed {max} characters"),
        ));
    }
    Ok(())
}
