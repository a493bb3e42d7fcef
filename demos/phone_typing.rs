//! Phone typing example for globalism-rs
//!
//! Feeds a number into the phone engine one keystroke at a time, the way an
//! input field would, and prints the state after each key.

use globalism_rs::prelude::*;

fn main() -> Result<()> {
    let db = CountryDb::load()?;

    for (code, number) in [("US", "5551234567"), ("FR", "0123456789"), ("JP", "0312345678")] {
        let Some(country) = db.find_country_by_code(code) else {
            println!("{code}: not in dataset");
            continue;
        };
        println!(
            "=== {} ({}) placeholder {} ===",
            country.name(),
            country.phone_code(),
            country.phone_placeholder().unwrap_or_default()
        );

        let mut typed = String::new();
        for key in number.chars() {
            typed.push(key);
            let state = country.analyze_phone(&typed);
            println!("{typed:<12} {:<9} {}", state.status.to_string(), state.international);
        }

        // One digit too many.
        typed.push('9');
        println!("{typed:<12} {}", country.analyze_phone(&typed).status);
        println!();
    }

    Ok(())
}
