//! Error handling example for globalism-rs
//!
//! Loading can fail and returns `GlobalismError`; the formatting engines
//! never fail and report problems through their return values instead.

use globalism_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== globalism-rs Error Handling Example ===\n");

    // Example 1: Loading a dataset that does not exist
    println!("--- Example 1: Missing dataset file ---");
    match CountryDb::load_from_path("does/not/exist.json", None) {
        Ok(db) => println!("  Unexpectedly loaded {} countries", db.countries().len()),
        Err(GlobalismError::NotFound(msg)) => println!("  Not found: {msg}"),
        Err(e) => println!("  Other error: {e}"),
    }
    println!();

    // Example 2: Malformed JSON
    println!("--- Example 2: Malformed dataset ---");
    if let Err(e) = CountryDb::from_json_str(r#"{ "countries": [ { "alpha2": 1 } ] }"#) {
        println!("  ✗ {e}");
    }
    println!();

    let db = CountryDb::load()?;

    // Example 3: Unknown and odd codes
    println!("--- Example 3: Codes that match nothing ---");
    for code in ["XX", "", "A", "ABCD", "123"] {
        match db.find_country_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.alpha2()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 4: Engines degrade instead of failing
    println!("--- Example 4: Missing conventions ---");
    if let Some(aq) = db.find_country_by_code("AQ") {
        let parts = AddressComponents::new().with(AddressField::City, "McMurdo Station");
        println!("  Address: {:?}", aq.format_address(&parts));
        println!("  Phone:   {}", aq.analyze_phone("12345").status);
        println!("  Amount:  {}", aq.format_currency(12.5));
    }

    // Example 5: A malformed pattern is logged and never matches
    let broken = Country {
        phone_format: Some("### ###".into()),
        phone_regexp: Some("[unclosed".into()),
        phone_country_code: Some("+999".into()),
        ..Default::default()
    };
    println!("  Broken pattern: {}", broken.analyze_phone("123456").status);

    Ok(())
}
