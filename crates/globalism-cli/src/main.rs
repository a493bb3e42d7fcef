//! globalism: command-line interface for globalism-core
//!
//! Inspect the bundled country reference data and try the formatting
//! engines from a terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ globalism stats
//!
//! - Show details for a country (alpha-2 or alpha-3, case-insensitive)
//!   $ globalism country deu
//!
//! - Format a phone number as typed
//!   $ globalism phone US 555123
//!
//! - Format an address
//!   $ globalism address US -c house_number=123 -c road="Main St" -c city=Springfield -c state_code=IL -c postcode=62701
//!
//! - Machine-readable output
//!   $ globalism --json phone GB 2079460958
//!
//! Data source
//! -----------
//!
//! By default the dataset embedded in `globalism-core` is used. Use
//! `--input <path>` for a custom `.json` or `.json.gz` file and
//! `--filter <A2,A2,...>` to load only some countries. Set `RUST_LOG=debug`
//! to see what gets loaded.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{anyhow, bail, Context};
use clap::Parser;
use globalism_core::currency::format_currency;
use globalism_core::postal::{postal_placeholder, validate_postal_code};
use globalism_core::{AddressComponents, Country, CountryDb, CountryLookup};
use serde::Serialize;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    // Parse filter if provided
    let filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });

    let db = load(args.input.as_deref(), filter.as_deref())?;
    log::debug!("Loaded {} countries", db.countries().len());
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if json {
                return print_json(&stats);
            }
            println!("Database statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Languages: {}", stats.languages);
            println!("  Groups: {}", stats.groups);
        }

        Commands::Countries => {
            if json {
                return print_json(db.countries());
            }
            for c in db.countries() {
                println!("{} ({})", c.name(), c.alpha2());
            }
        }

        Commands::Country { code } => {
            let c = country(&db, &code)?;
            if json {
                return print_json(c);
            }
            println!("Country: {}", c.name());
            println!("Official name: {}", c.official_name());
            println!("Alpha-2: {}", c.alpha2());
            println!("Alpha-3: {}", c.alpha3());
            println!("Phone Code: {}", c.phone_code());
            println!("Currency: {} {}", c.currency(), c.currency_symbol());
            if let Some(flag) = c.flag() {
                println!("Flag: {flag}");
            }
            if let Some(placeholder) = c.phone_placeholder() {
                println!("Phone format: {placeholder}");
            }
            println!("Groups: {}", c.groups.join(", "));
        }

        Commands::Group { id } => {
            let group = db
                .find_group_by_id(&id)
                .ok_or_else(|| anyhow!("No group found for: {id}"))?;
            let members = db.find_countries_by_group(&group.id);
            if json {
                return print_json(&members);
            }
            println!("{} ({} loaded members):", group.name, members.len());
            for c in members {
                println!("- {} ({})", c.name(), c.alpha2());
            }
        }

        Commands::Languages { code } => {
            let c = country(&db, &code)?;
            let languages = db.languages_for_country(c);
            if json {
                return print_json(&languages);
            }
            for l in languages {
                let direction = if l.is_rtl() { " [rtl]" } else { "" };
                println!("{}: {} / {}{direction}", l.code, l.name(), l.native_name);
            }
        }

        Commands::Phone { code, number } => {
            let state = country(&db, &code)?.analyze_phone(&number);
            if json {
                return print_json(&state);
            }
            println!("Status: {}", state.status);
            println!("Formatted: {}", state.formatted);
            println!("International: {}", state.international);
        }

        Commands::Address { code, components } => {
            let c = country(&db, &code)?;
            let parts: AddressComponents = components.into_iter().collect();
            let lines = c
                .format_address_lines(&parts)
                .ok_or_else(|| anyhow!("{} has no address format", c.name()))?;
            if json {
                return print_json(&lines);
            }
            for line in lines {
                println!("{line}");
            }
        }

        Commands::Fields { code } => {
            let fields = country(&db, &code)?.required_address_fields();
            if json {
                return print_json(&fields);
            }
            for f in fields {
                println!("{f}");
            }
        }

        Commands::Currency { code, amount } => {
            let formatted = format_currency(amount, country(&db, &code)?);
            if json {
                return print_json(&formatted);
            }
            println!("{formatted}");
        }

        Commands::Postal { code, postcode } => {
            let c = country(&db, &code)?;
            let valid = validate_postal_code(&postcode, c);
            if json {
                return print_json(&valid);
            }
            match postal_placeholder(c) {
                Some(format) => println!("{postcode}: {} (format {format})", verdict(valid)),
                None => println!("{postcode}: {}", verdict(valid)),
            }
            if !valid {
                bail!("{postcode} is not a valid postal code for {}", c.name());
            }
        }
    }

    Ok(())
}

fn load(input: Option<&str>, filter: Option<&[&str]>) -> anyhow::Result<Arc<CountryDb>> {
    match (input, filter) {
        (Some(path), filter) => CountryDb::load_from_path(path, filter)
            .map(Arc::new)
            .with_context(|| format!("loading {path}")),
        (None, Some(codes)) => Ok(Arc::new(CountryDb::load_filtered_by_alpha2(codes)?)),
        (None, None) => Ok(CountryDb::load()?),
    }
}

fn country<'a>(db: &'a CountryDb, code: &str) -> anyhow::Result<&'a Country> {
    db.find_country_by_code(code)
        .ok_or_else(|| anyhow!("No country found for: {code}"))
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
