// crates/globalism-core/src/postal.rs
use crate::model::Country;
use crate::text::{matches_pattern, non_blank};

/// Tests the trimmed input against the country's postal-code pattern.
///
/// Follows the same rules as [`crate::phone::validate_phone`]: no pattern,
/// blank input, or a pattern that fails to compile all give `false`.
///
/// ```
/// use globalism_core::postal::validate_postal_code;
/// use globalism_core::Country;
///
/// let us = Country {
///     postal_code_regexp: Some(r"^\\d{5}(-\\d{4})?$".into()),
///     ..Default::default()
/// };
/// assert!(validate_postal_code("62701", &us));
/// assert!(validate_postal_code("62701-1234", &us));
/// assert!(!validate_postal_code("6270", &us));
/// ```
pub fn validate_postal_code(input: &str, country: &Country) -> bool {
    matches_pattern(input, country.postal_code_regexp.as_deref())
}

/// The postal-code format as an input placeholder: `"#####-####"` becomes
/// `"00000-0000"`, letter slots and separators are kept.
pub fn postal_placeholder(country: &Country) -> Option<String> {
    non_blank(country.postal_code_format.as_deref()).map(|format| format.trim().replace('#', "0"))
}
