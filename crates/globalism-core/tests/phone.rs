// crates/globalism-core/tests/phone.rs
use globalism_core::phone::{analyze_phone, PhoneMask};
use globalism_core::{Country, CountryDb, CountryLookup, PhoneStatus};

fn country(code: &str) -> Country {
    CountryDb::load()
        .expect("embedded dataset")
        .find_country_by_code(code)
        .unwrap_or_else(|| panic!("{code} is in the dataset"))
        .clone()
}

#[test]
fn us_number_is_formatted_and_complete() {
    let us = country("US");
    assert_eq!(us.format_phone("5551234567", false), "(555) 123-4567");
    assert!(us.validate_phone("(555) 123-4567"));

    let state = us.analyze_phone("5551234567");
    assert_eq!(state.status, PhoneStatus::Complete);
    assert_eq!(state.formatted, "(555) 123-4567");
    assert_eq!(state.international, "+1 (555) 123-4567");
    assert_eq!(state.original, "5551234567");
}

#[test]
fn typing_a_us_number_grows_the_mask() {
    let us = country("US");
    let typed: Vec<_> = ["1", "12", "123", "1234", "12345678"]
        .iter()
        .map(|input| us.format_phone(input, true))
        .collect();
    assert_eq!(typed, ["(1", "(12", "(123", "(123) 4", "(123) 456-78"]);
}

#[test]
fn uk_mask() {
    let gb = country("GB");
    assert_eq!(gb.phone_placeholder().as_deref(), Some("0000 000000"));
    assert_eq!(gb.format_phone("2079460958", false), "2079 460958");

    let state = gb.analyze_phone("2079 460958");
    assert_eq!(state.status, PhoneStatus::Complete);
    assert_eq!(state.international, "+44 2079 460958");
}

#[test]
fn dash_separated_masks() {
    let jp = country("JP");
    assert_eq!(jp.format_phone("0312345678", false), "03-1234-5678");
    assert_eq!(jp.format_phone("0312", true), "03-12");
    assert!(jp.validate_phone("03-1234-5678"));
}

#[test]
fn placeholders_for_every_masked_country() {
    let db = CountryDb::load().expect("embedded dataset");
    for c in db.countries() {
        match c.phone_format.as_deref() {
            Some(mask) => {
                let placeholder = c.phone_placeholder().expect("mask gives a placeholder");
                assert!(!placeholder.contains('#'), "{}: {placeholder}", c.alpha2);
                let slots = PhoneMask::new(mask).expect("non-blank mask").slot_count();
                assert_eq!(placeholder.matches('0').count(), slots, "{}", c.alpha2);
            }
            None => assert_eq!(c.phone_placeholder(), None),
        }
    }
}

#[test]
fn country_without_a_mask_is_always_invalid() {
    let aq = country("AQ");
    assert_eq!(aq.format_phone("12345", true), "12345");
    let state = analyze_phone("12345", &aq);
    assert_eq!(state.status, PhoneStatus::Invalid);
    assert_eq!(state.international, "12345");
}

#[test]
fn letters_only_input_is_empty() {
    let fr = country("FR");
    let state = fr.analyze_phone("abc");
    assert_eq!(state.status, PhoneStatus::Empty);
    assert_eq!(state.formatted, "abc");
}

#[test]
fn too_many_digits_is_invalid() {
    let fr = country("FR");
    let state = fr.analyze_phone("01 23 45 67 89 0");
    assert_eq!(state.status, PhoneStatus::Invalid);
    assert_eq!(state.formatted, "01 23 45 67 89 0");
}

#[test]
fn validation_rejects_foreign_separators() {
    let us = country("US");
    // Ten digits, but the pattern does not allow a slash.
    let state = us.analyze_phone("555/123/4567");
    assert_eq!(state.status, PhoneStatus::Invalid);
    assert_eq!(us.format_phone("555/123/4567", false), "(555) 123-4567");
}

#[test]
fn non_ascii_digits_do_not_complete_a_number() {
    let de = country("DE");
    assert!(de.analyze_phone("1234 5678901").is_complete());

    // Eleven ASCII digits fill the mask; the Arabic-Indic one must not pass.
    let state = de.analyze_phone("1234 5678901\u{0661}");
    assert_eq!(state.status, PhoneStatus::Invalid);
    assert_eq!(state.formatted, "1234 5678901\u{0661}");
}
