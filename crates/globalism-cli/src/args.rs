use clap::{Parser, Subcommand};
use globalism_core::AddressField;

/// CLI arguments for globalism
#[derive(Debug, Parser)]
#[command(
    name = "globalism",
    version,
    about = "Query country reference data and format addresses, phone numbers and amounts"
)]
pub struct CliArgs {
    /// Path to a JSON or JSON.gz dataset (default: the dataset embedded in globalism-core)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of alpha-2 country codes to load (e.g. DE,CH,FR)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all countries
    Countries,

    /// Lookup a country by alpha-2 or alpha-3 code
    Country {
        /// Alpha-2 or alpha-3 code (e.g. DE, USA)
        code: String,
    },

    /// List the member countries of a group
    Group {
        /// Group id (e.g. EU, G7)
        id: String,
    },

    /// List the languages spoken in a country
    Languages {
        code: String,
    },

    /// Format and classify a national phone number
    Phone {
        code: String,
        /// Number as typed; non-digits are ignored when formatting
        number: String,
    },

    /// Format an address with the country's template
    Address {
        code: String,
        /// Address component as key=value (e.g. -c city=Berlin -c postcode=10115)
        #[arg(short = 'c', long = "component", value_parser = parse_component)]
        components: Vec<(AddressField, String)>,
    },

    /// List the address fields a country's template uses
    Fields {
        code: String,
    },

    /// Format an amount in the country's currency
    Currency {
        code: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Validate a postal code
    Postal {
        code: String,
        postcode: String,
    },
}

/// Parses `key=value` into an address component.
pub fn parse_component(s: &str) -> Result<(AddressField, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    let field = key.parse::<AddressField>().map_err(|e| e.to_string())?;
    Ok((field, value.to_owned()))
}
