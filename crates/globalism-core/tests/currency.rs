// crates/globalism-core/tests/currency.rs
use globalism_core::currency::{
    currency_symbol, format_currency_parts, format_currency_with, CurrencyFormat,
    CurrencyPartKind,
};
use globalism_core::{CountryDb, CountryLookup};

#[test]
fn dataset_currencies() {
    let db = CountryDb::load().expect("embedded dataset");
    let cases = [
        ("US", 1234.5, "$1234.50"),
        ("DE", 9.99, "€9.99"),
        ("GB", 0.5, "£0.50"),
        ("JP", 1500.0, "¥1500"),
        ("IN", 100.0, "₹100.00"),
        ("CH", 12.0, "CHF12.00"),
        ("AQ", 12.5, "12.5"),
    ];
    for (code, amount, expected) in cases {
        let country = db.find_country_by_code(code).expect("country in dataset");
        assert_eq!(country.format_currency(amount), expected, "{code}");
    }
}

#[test]
fn symbols() {
    let db = CountryDb::load().expect("embedded dataset");
    let fr = db.find_country_by_code("FRA").expect("FR in dataset");
    assert_eq!(currency_symbol(fr), "€");
    let aq = db.find_country_by_code("AQ").expect("AQ in dataset");
    assert_eq!(currency_symbol(aq), "");
}

#[test]
fn parts_reassemble_into_the_formatted_string() {
    let db = CountryDb::load().expect("embedded dataset");
    let us = db.find_country_by_code("US").expect("US in dataset");
    let parts = format_currency_parts(-42.125, us);
    let joined: String = parts.iter().map(|p| p.value.as_str()).collect();
    assert_eq!(joined, us.format_currency(-42.125));
    assert_eq!(parts[1].kind, CurrencyPartKind::Currency);
    assert_eq!(parts[1].value, "$");
}

#[test]
fn custom_fraction_digits() {
    let db = CountryDb::load().expect("embedded dataset");
    let jp = db.find_country_by_code("JP").expect("JP in dataset");
    let options = CurrencyFormat {
        fraction_digits: Some(2),
    };
    assert_eq!(format_currency_with(1500.0, jp, options), "¥1500.00");
}
