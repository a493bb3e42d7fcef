// crates/globalism-core/src/address/mod.rs

//! # Address Formatting
//!
//! Renders [`AddressComponents`] through a country's address template (a
//! list of Mustache-subset line templates, see [`template`]).
//!
//! Three outcomes are kept distinct:
//! - `None`: the country has no template, so it cannot be formatted;
//! - `Some(vec![])`: the template exists but nothing rendered;
//! - `Some(lines)`: the non-blank rendered lines, in template order.

pub mod components;
pub mod template;

pub use components::{AddressComponents, AddressField, UnknownAddressField};
pub use template::{render_line, Resolver};

use std::collections::BTreeSet;

/// Render each template line and keep those with content.
///
/// An absent or empty template yields `None`.
///
/// ```
/// use globalism_core::address::{render_address_lines, AddressComponents, AddressField};
///
/// let template = ["{{recipient}}", "{{house_number}} {{road}}", "{{city}}, {{state_code}} {{postcode}}"];
/// let parts = AddressComponents::new()
///     .with(AddressField::HouseNumber, "123")
///     .with(AddressField::Road, "Main St")
///     .with(AddressField::City, "Springfield")
///     .with(AddressField::StateCode, "IL")
///     .with(AddressField::Postcode, "62701");
///
/// assert_eq!(
///     render_address_lines(&parts, Some(&template[..])),
///     Some(vec!["123 Main St".to_owned(), "Springfield, IL 62701".to_owned()])
/// );
/// ```
pub fn render_address_lines<S: AsRef<str>>(
    components: &AddressComponents,
    template: Option<&[S]>,
) -> Option<Vec<String>> {
    let template = template.filter(|lines| !lines.is_empty())?;
    Some(
        template
            .iter()
            .map(|line| render_line(line.as_ref(), components))
            .filter(|line| !line.is_empty())
            .collect(),
    )
}

/// Like [`render_address_lines`], joined with `\n`.
pub fn render_address<S: AsRef<str>>(
    components: &AddressComponents,
    template: Option<&[S]>,
) -> Option<String> {
    render_address_lines(components, template).map(|lines| lines.join("\n"))
}

/// The address fields a template substitutes, in canonical field order.
///
/// Section markers and keys outside the closed field set (such as `first`)
/// are ignored. Returns `[]` without a template.
pub fn required_address_fields<S: AsRef<str>>(template: Option<&[S]>) -> Vec<AddressField> {
    let Some(template) = template else {
        return Vec::new();
    };
    let found: BTreeSet<AddressField> = template
        .iter()
        .flat_map(|line| template::substitution_keys(line.as_ref()))
        .filter_map(AddressField::from_key)
        .collect();
    found.into_iter().collect()
}
