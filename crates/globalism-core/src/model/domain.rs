// crates/globalism-core/src/model/domain.rs
use crate::address::{self, AddressComponents, AddressField};
use crate::currency;
use crate::phone::{self, PhoneNumberState};
use crate::postal;
use crate::traits::{AddressConventions, PhoneConventions};
use serde::{Deserialize, Serialize};

/// The master database struct.
///
/// Built once (see [`CountryDb::load`](crate::CountryDb::load) and
/// [`CountryDb::load_from_path`](crate::CountryDb::load_from_path)) and
/// never mutated afterwards; share it behind an `Arc`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryDb {
    /// All countries, in dataset order.
    pub countries: Vec<Country>,
    /// ISO 639-1 languages referenced by the countries.
    pub languages: Vec<Language>,
    /// Country groupings such as `EU` or `G7`.
    pub groups: Vec<CountryGroup>,
}

/// A country entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO 3166-1 alpha-2, upper case.
    pub alpha2: String,
    /// ISO 3166-1 alpha-3, upper case.
    pub alpha3: String,
    /// Anglicized short name, e.g. "Mexico".
    pub name: String,
    pub official_name: Option<String>,
    pub native_names: Vec<String>,
    /// ISO 639-1 language codes.
    pub languages: Vec<String>,
    /// Group ids, e.g. `["EU", "NATO"]`.
    pub groups: Vec<String>,

    /// ISO 4217 currency code, e.g. "MXN".
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,

    /// International dialing code, e.g. "+52".
    pub phone_country_code: Option<String>,
    /// Escaped regular expression for national phone numbers.
    pub phone_regexp: Option<String>,
    /// Phone mask, `#` marks a digit slot, e.g. "(###) ###-####".
    pub phone_format: Option<String>,

    pub postal_code_regexp: Option<String>,
    pub postal_code_format: Option<String>,

    pub tld: Option<String>,
    pub flag: Option<String>,

    /// Address template lines, see [`crate::address`].
    pub address_format: Option<Vec<String>>,
}

/// A human language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// ISO 639-1 code, e.g. "en".
    pub code: String,
    /// English name, e.g. "Spanish".
    pub name: String,
    /// Native name, e.g. "Español".
    pub native_name: String,
    /// `true` for right-to-left scripts.
    pub rtl: bool,
    pub script: Option<String>,
}

/// A named grouping of countries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryGroup {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupingType,
    pub description: Option<String>,
    /// Alpha-2 codes of the members. May reference countries that are not
    /// part of a filtered or partial dataset.
    pub members: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupingType {
    Continent,
    Region,
    EconomicUnion,
    MilitaryAlliance,
    PoliticalUnion,
    CustomsUnion,
    CurrencyUnion,
    FreeTradeArea,
    CulturalGroup,
    Other,
}

impl GroupingType {
    /// Parses the dataset spelling (`"ECONOMIC_UNION"`); anything unknown
    /// becomes [`GroupingType::Other`].
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "CONTINENT" => Self::Continent,
            "REGION" => Self::Region,
            "ECONOMIC_UNION" => Self::EconomicUnion,
            "MILITARY_ALLIANCE" => Self::MilitaryAlliance,
            "POLITICAL_UNION" => Self::PoliticalUnion,
            "CUSTOMS_UNION" => Self::CustomsUnion,
            "CURRENCY_UNION" => Self::CurrencyUnion,
            "FREE_TRADE_AREA" => Self::FreeTradeArea,
            "CULTURAL_GROUP" => Self::CulturalGroup,
            _ => Self::Other,
        }
    }
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    pub fn official_name(&self) -> &str {
        self.official_name.as_deref().unwrap_or(&self.name)
    }

    /// ISO 4217 code, or `""` when the country has no currency.
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or("")
    }

    pub fn currency_symbol(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or("")
    }

    /// Calling code such as `"+44"`, or `""`.
    pub fn phone_code(&self) -> &str {
        self.phone_country_code.as_deref().unwrap_or("")
    }

    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    pub fn tld(&self) -> Option<&str> {
        self.tld.as_deref()
    }

    pub fn is_member_of(&self, group_id: &str) -> bool {
        self.groups.iter().any(|g| g == group_id)
    }

    /// See [`address::render_address_lines`].
    pub fn format_address_lines(&self, components: &AddressComponents) -> Option<Vec<String>> {
        address::render_address_lines(components, self.address_format())
    }

    /// See [`address::render_address`].
    pub fn format_address(&self, components: &AddressComponents) -> Option<String> {
        address::render_address(components, self.address_format())
    }

    /// The address fields this country's template uses, in canonical order.
    pub fn required_address_fields(&self) -> Vec<AddressField> {
        address::required_address_fields(self.address_format())
    }

    pub fn phone_placeholder(&self) -> Option<String> {
        phone::phone_placeholder(self.phone_format())
    }

    /// See [`phone::format_phone_digits`].
    pub fn format_phone(&self, input: &str, allow_partial: bool) -> String {
        phone::format_phone_digits(input, self.phone_format(), allow_partial)
    }

    pub fn validate_phone(&self, input: &str) -> bool {
        phone::validate_phone(input, self.phone_regexp())
    }

    pub fn analyze_phone(&self, input: &str) -> PhoneNumberState {
        phone::analyze_phone(input, self)
    }

    pub fn format_currency(&self, amount: f64) -> String {
        currency::format_currency(amount, self)
    }

    pub fn validate_postal_code(&self, input: &str) -> bool {
        postal::validate_postal_code(input, self)
    }
}

impl PhoneConventions for Country {
    fn phone_format(&self) -> Option<&str> {
        self.phone_format.as_deref()
    }

    fn phone_regexp(&self) -> Option<&str> {
        self.phone_regexp.as_deref()
    }

    fn phone_country_code(&self) -> Option<&str> {
        self.phone_country_code.as_deref()
    }
}

impl AddressConventions for Country {
    fn address_format(&self) -> Option<&[String]> {
        self.address_format.as_deref()
    }
}

impl Language {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }
}

impl CountryGroup {
    pub fn has_member(&self, alpha2: &str) -> bool {
        self.members.iter().any(|m| m.eq_ignore_ascii_case(alpha2))
    }
}
