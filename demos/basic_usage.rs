//! Basic usage example for globalism-rs
//!
//! This example demonstrates how to:
//! - Load the embedded country database
//! - Look up countries, groups and languages
//! - Format an address, a phone number and an amount

use globalism_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== globalism-rs Basic Usage Example ===\n");

    println!("Loading country database...");
    let db = CountryDb::load()?;
    let stats = db.stats();
    println!(
        "✓ {} countries, {} languages, {} groups\n",
        stats.countries, stats.languages, stats.groups
    );

    // Example 1: Find a country by code
    println!("--- Example 1: Find country by code ---");
    if let Some(country) = db.find_country_by_code("usa") {
        println!("Found: {} ({})", country.name(), country.official_name());
        println!("Alpha-2: {}", country.alpha2());
        println!("Phone code: {}", country.phone_code());
        println!("Currency: {}", country.currency());
    }
    println!();

    // Example 2: Group members
    println!("--- Example 2: Members of the G7 ---");
    for country in db.find_countries_by_group("G7") {
        println!("- {} {}", country.flag().unwrap_or(" "), country.name());
    }
    println!();

    // Example 3: Accent-insensitive search over native names
    println!("--- Example 3: Search 'republique' ---");
    for country in db.find_countries_by_substring("republique") {
        println!("- {}", country.name());
    }
    println!();

    // Example 4: Address formatting
    println!("--- Example 4: Format a German address ---");
    if let Some(de) = db.find_country_by_code("DE") {
        let parts = AddressComponents::new()
            .with(AddressField::Recipient, "Deutscher Bundestag")
            .with(AddressField::Road, "Platz der Republik")
            .with(AddressField::HouseNumber, "1")
            .with(AddressField::Postcode, "11011")
            .with(AddressField::City, "Berlin")
            .with(AddressField::Country, "Deutschland");
        match de.format_address(&parts) {
            Some(address) => println!("{address}"),
            None => println!("No address format for {}", de.name()),
        }
    }
    println!();

    // Example 5: Phone numbers and currency
    println!("--- Example 5: Phone and currency ---");
    if let Some(gb) = db.find_country_by_code("GB") {
        let state = gb.analyze_phone("2079460958");
        println!("{} -> {} ({})", state.original, state.international, state.status);
        println!("{}", format_currency(1234.5, gb));
    }

    Ok(())
}
