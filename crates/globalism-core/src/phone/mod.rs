// crates/globalism-core/src/phone/mod.rs

//! # Phone Number Masks
//!
//! Formats national phone numbers through a country's mask as they are
//! typed, and classifies the input as empty, partial, complete or invalid.
//!
//! Every function here is total: missing conventions, odd input and
//! malformed patterns all map to a defined result, never to an error.

mod mask;

pub use mask::{PhoneMask, SLOT};

use crate::text::{digits_only, matches_pattern, non_blank};
use crate::traits::PhoneConventions;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneStatus {
    /// No digits yet.
    Empty,
    /// Fewer digits than the mask has slots.
    Partial,
    /// Exactly as many digits as slots, and the pattern accepts the input.
    Complete,
    /// Too many digits, rejected by the pattern, or no conventions known.
    Invalid,
}

impl fmt::Display for PhoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhoneStatus::Empty => "empty",
            PhoneStatus::Partial => "partial",
            PhoneStatus::Complete => "complete",
            PhoneStatus::Invalid => "invalid",
        })
    }
}

/// Snapshot of a phone input, recomputed on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberState {
    pub status: PhoneStatus,
    pub formatted: String,
    pub original: String,
    /// `"{calling code} {formatted}"` for partial and complete input,
    /// otherwise the original input.
    pub international: String,
}

impl PhoneNumberState {
    /// Every representation is the untouched input.
    fn unchanged(status: PhoneStatus, input: &str) -> Self {
        Self {
            status,
            formatted: input.to_owned(),
            original: input.to_owned(),
            international: input.to_owned(),
        }
    }

    fn formatted(status: PhoneStatus, input: &str, formatted: String, calling_code: &str) -> Self {
        Self {
            status,
            international: format!("{calling_code} {formatted}"),
            formatted,
            original: input.to_owned(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == PhoneStatus::Complete
    }
}

/// The mask as an input placeholder (`"(000) 000-0000"`), or `None` when the
/// country has no mask.
pub fn phone_placeholder(mask: Option<&str>) -> Option<String> {
    mask.and_then(PhoneMask::new).map(|m| m.placeholder())
}

/// Format the digits of `input` through `mask`.
///
/// The input is returned unchanged when there is no mask, when it holds no
/// digits, or when `allow_partial` is off and the digit count differs from
/// the slot count.
///
/// ```
/// use globalism_core::phone::format_phone_digits;
///
/// let us = Some("(###) ###-####");
/// assert_eq!(format_phone_digits("555-123-4567", us, false), "(555) 123-4567");
/// assert_eq!(format_phone_digits("123", us, true), "(123");
/// assert_eq!(format_phone_digits("123", us, false), "123");
/// ```
pub fn format_phone_digits(input: &str, mask: Option<&str>, allow_partial: bool) -> String {
    let Some(mask) = mask.and_then(PhoneMask::new) else {
        return input.to_owned();
    };
    let digits = digits_only(input);
    if digits.is_empty() || (!allow_partial && digits.len() != mask.slot_count()) {
        return input.to_owned();
    }
    mask.fill(&digits)
}

/// Test the trimmed input, separators included, against the stored
/// (escaped) pattern.
///
/// `false` without a pattern, for blank input, or when the pattern does not
/// compile.
pub fn validate_phone(input: &str, regexp: Option<&str>) -> bool {
    matches_pattern(input, regexp)
}

/// Classify and format `input` against a country's phone conventions.
///
/// A mask or calling code that is empty or whitespace-only counts as
/// missing, and the input is then `Invalid`.
///
/// ```
/// use globalism_core::phone::{analyze_phone, PhoneStatus};
/// use globalism_core::Country;
///
/// let us = Country {
///     alpha2: "US".into(),
///     alpha3: "USA".into(),
///     name: "United States".into(),
///     phone_country_code: Some("+1".into()),
///     phone_format: Some("(###) ###-####".into()),
///     phone_regexp: Some(r"^\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}$".into()),
///     ..Default::default()
/// };
///
/// let state = analyze_phone("5551234567", &us);
/// assert_eq!(state.status, PhoneStatus::Complete);
/// assert_eq!(state.international, "+1 (555) 123-4567");
///
/// assert_eq!(analyze_phone("555", &us).status, PhoneStatus::Partial);
/// ```
pub fn analyze_phone<C: PhoneConventions + ?Sized>(input: &str, country: &C) -> PhoneNumberState {
    let mask = country.phone_format().and_then(PhoneMask::new);
    let calling_code = non_blank(country.phone_country_code());
    let (Some(mask), Some(calling_code)) = (mask, calling_code) else {
        return PhoneNumberState::unchanged(PhoneStatus::Invalid, input);
    };

    let digits = digits_only(input);
    if digits.is_empty() {
        return PhoneNumberState::unchanged(PhoneStatus::Empty, input);
    }

    match digits.len().cmp(&mask.slot_count()) {
        Ordering::Greater => PhoneNumberState::unchanged(PhoneStatus::Invalid, input),
        Ordering::Less => {
            PhoneNumberState::formatted(PhoneStatus::Partial, input, mask.fill(&digits), calling_code)
        }
        Ordering::Equal if validate_phone(input, country.phone_regexp()) => {
            PhoneNumberState::formatted(PhoneStatus::Complete, input, mask.fill(&digits), calling_code)
        }
        Ordering::Equal => PhoneNumberState::unchanged(PhoneStatus::Invalid, input),
    }
}
