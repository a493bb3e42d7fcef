// crates/globalism-core/src/currency.rs

//! Plain currency formatting: the country's symbol followed by the amount
//! with the currency's fixed number of fraction digits (`"$1234.50"`).
//!
//! There is no locale data here, so no digit grouping and no symbol
//! placement rules.

use crate::model::Country;
use crate::text::non_blank;
use serde::{Deserialize, Serialize};

/// ISO 4217 currencies without minor units.
const ZERO_DECIMAL: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "UYI", "VND",
    "VUV", "XAF", "XOF", "XPF",
];

/// ISO 4217 currencies with three minor digits.
const THREE_DECIMAL: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

/// Upper bound for fraction digits, as in JS `toFixed`.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// The country's currency symbol, `""` when unknown.
pub fn currency_symbol(country: &Country) -> &str {
    country.currency_symbol()
}

/// Number of fraction digits for an ISO 4217 code; unknown codes get 2.
pub fn minor_units(code: &str) -> usize {
    let code = code.trim().to_ascii_uppercase();
    if ZERO_DECIMAL.contains(&code.as_str()) {
        0
    } else if THREE_DECIMAL.contains(&code.as_str()) {
        3
    } else {
        2
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// Overrides the currency's minor units; capped at [`MAX_FRACTION_DIGITS`].
    pub fraction_digits: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyPartKind {
    MinusSign,
    Currency,
    Integer,
    Decimal,
    Fraction,
    Literal,
}

/// One piece of a formatted amount, for callers that style the symbol and
/// the digits separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPart {
    #[serde(rename = "type")]
    pub kind: CurrencyPartKind,
    pub value: String,
}

impl CurrencyPart {
    fn new(kind: CurrencyPartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// ```
/// use globalism_core::currency::format_currency;
/// use globalism_core::Country;
///
/// let gb = Country {
///     currency: Some("GBP".into()),
///     currency_symbol: Some("£".into()),
///     ..Default::default()
/// };
/// assert_eq!(format_currency(1234.5, &gb), "£1234.50");
/// assert_eq!(format_currency(1234.5, &Country::default()), "1234.5");
/// ```
pub fn format_currency(amount: f64, country: &Country) -> String {
    format_currency_with(amount, country, CurrencyFormat::default())
}

pub fn format_currency_with(amount: f64, country: &Country, options: CurrencyFormat) -> String {
    parts(amount, country, options)
        .into_iter()
        .map(|part| part.value)
        .collect()
}

/// The formatted amount split into typed parts.
///
/// Without a currency, or for a non-finite amount, the result is a single
/// `Literal` part holding the whole string.
pub fn format_currency_parts(amount: f64, country: &Country) -> Vec<CurrencyPart> {
    parts(amount, country, CurrencyFormat::default())
}

fn parts(amount: f64, country: &Country, options: CurrencyFormat) -> Vec<CurrencyPart> {
    let Some(code) = non_blank(country.currency.as_deref()) else {
        return vec![CurrencyPart::new(CurrencyPartKind::Literal, plain_number(amount))];
    };
    let symbol = country.currency_symbol();
    if !amount.is_finite() {
        return vec![CurrencyPart::new(
            CurrencyPartKind::Literal,
            format!("{symbol}{}", plain_number(amount)),
        )];
    }

    let digits = options
        .fraction_digits
        .unwrap_or_else(|| minor_units(code))
        .min(MAX_FRACTION_DIGITS);
    let fixed = format!("{:.*}", digits, amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = Vec::with_capacity(5);
    if amount < 0.0 {
        out.push(CurrencyPart::new(CurrencyPartKind::MinusSign, "-"));
    }
    if !symbol.is_empty() {
        out.push(CurrencyPart::new(CurrencyPartKind::Currency, symbol));
    }
    out.push(CurrencyPart::new(CurrencyPartKind::Integer, integer));
    if !fraction.is_empty() {
        out.push(CurrencyPart::new(CurrencyPartKind::Decimal, "."));
        out.push(CurrencyPart::new(CurrencyPartKind::Fraction, fraction));
    }
    out
}

/// Shortest decimal rendering, spelled the way dataset consumers expect
/// (`"Infinity"`, not `"inf"`).
fn plain_number(amount: f64) -> String {
    if amount.is_nan() {
        "NaN".to_owned()
    } else if amount == f64::INFINITY {
        "Infinity".to_owned()
    } else if amount == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else if amount == 0.0 {
        "0".to_owned()
    } else {
        amount.to_string()
    }
}
