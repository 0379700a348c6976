//! Pure syntax validators for customer contact fields.
//!
//! These checks gate the create and update endpoints. The email check is a
//! shape check only: `local-part@domain.tld` with no whitespace or `@`
//! inside either part, and no length or domain-existence verification.

use std::env;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Behaviour of [`validate_phone_number`].
///
/// The legacy validator only required *one* character from the accepted set
/// anywhere in the string, so almost any input containing a digit passed.
/// That looseness is externally observable accept/reject behaviour, so
/// tightening it is an explicit opt-in rather than a silent change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhoneValidation {
    /// Accept any string containing at least one accepted character.
    #[default]
    Permissive,
    /// Accept only non-empty strings made entirely of accepted characters.
    Strict,
}

impl PhoneValidation {
    /// Read the mode from the `PHONE_VALIDATION` environment variable.
    ///
    /// `strict` (case-insensitive) selects [`PhoneValidation::Strict`];
    /// anything else, including an unset variable, keeps the permissive
    /// legacy behaviour.
    pub fn from_env() -> Self {
        match env::var("PHONE_VALIDATION") {
            Ok(value) if value.eq_ignore_ascii_case("strict") => Self::Strict,
            _ => Self::Permissive,
        }
    }
}

fn accepted_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ')
}

/// Check that an email has the shape `local-part@domain.tld`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check a phone number against the selected validation mode.
pub fn validate_phone_number(phone: &str, mode: PhoneValidation) -> bool {
    match mode {
        PhoneValidation::Permissive => phone.chars().any(accepted_phone_char),
        PhoneValidation::Strict => !phone.is_empty() && phone.chars().all(accepted_phone_char),
    }
}
