// crates/globalism-core/src/raw.rs
use serde::Deserialize;

/// Raw country structure as it comes from the dataset JSON.
///
/// Optional strings may be present but empty; [`crate::model::convert`]
/// normalizes those to `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRaw {
    pub alpha2: String,
    pub alpha3: String,
    pub name: String,
    #[serde(default)]
    pub official_name: Option<String>,
    #[serde(default)]
    pub native_names: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub phone_country_code: Option<String>,
    #[serde(default)]
    pub phone_regexp: Option<String>,
    #[serde(default)]
    pub phone_format: Option<String>,
    #[serde(default)]
    pub postal_code_regexp: Option<String>,
    #[serde(default)]
    pub postal_code_format: Option<String>,
    #[serde(default)]
    pub tld: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub address_format: Option<Vec<String>>,
}

/// Raw language entry: `{ "code": "fr", "name": "French", "nativeName": "Français" }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRaw {
    pub code: String,
    pub name: String,
    pub native_name: String,
    #[serde(default)]
    pub rtl: Option<bool>,
    #[serde(default)]
    pub script: Option<String>,
}

/// Raw country group entry (`EU`, `NATO`, ...).
#[derive(Debug, Deserialize)]
pub struct CountryGroupRaw {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

/// The whole dataset document.
#[derive(Debug, Deserialize)]
pub struct DatasetRaw {
    pub countries: Vec<CountryRaw>,
    #[serde(default)]
    pub languages: Vec<LanguageRaw>,
    #[serde(default)]
    pub groups: Vec<CountryGroupRaw>,
}
