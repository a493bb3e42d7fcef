// crates/globalism-core/src/address/components.rs
use super::template::Resolver;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of address component names.
///
/// Declaration order is the canonical field order used by
/// [`required_address_fields`](super::required_address_fields).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    /// Recipient name, person or business.
    Recipient,
    HouseNumber,
    /// Building name, e.g. "Empire State Building".
    House,
    Road,
    Neighbourhood,
    Suburb,
    CityDistrict,
    City,
    /// Postal town, common in GB.
    PostalTown,
    County,
    /// State or province code, e.g. "CA", "NSW".
    StateCode,
    State,
    Postcode,
    Country,
    /// ISO 3166-1 alpha-2 code.
    CountryCode,
}

impl AddressField {
    pub const ALL: [AddressField; 15] = [
        AddressField::Recipient,
        AddressField::HouseNumber,
        AddressField::House,
        AddressField::Road,
        AddressField::Neighbourhood,
        AddressField::Suburb,
        AddressField::CityDistrict,
        AddressField::City,
        AddressField::PostalTown,
        AddressField::County,
        AddressField::StateCode,
        AddressField::State,
        AddressField::Postcode,
        AddressField::Country,
        AddressField::CountryCode,
    ];

    /// The template key, e.g. `"house_number"`.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressField::Recipient => "recipient",
            AddressField::HouseNumber => "house_number",
            AddressField::House => "house",
            AddressField::Road => "road",
            AddressField::Neighbourhood => "neighbourhood",
            AddressField::Suburb => "suburb",
            AddressField::CityDistrict => "city_district",
            AddressField::City => "city",
            AddressField::PostalTown => "postal_town",
            AddressField::County => "county",
            AddressField::StateCode => "state_code",
            AddressField::State => "state",
            AddressField::Postcode => "postcode",
            AddressField::Country => "country",
            AddressField::CountryCode => "country_code",
        }
    }

    /// Looks up a template key; `None` for anything outside the closed set.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAddressField(pub String);

impl fmt::Display for UnknownAddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown address field: {}", self.0)
    }
}

impl std::error::Error for UnknownAddressField {}

impl FromStr for AddressField {
    type Err = UnknownAddressField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| UnknownAddressField(s.to_owned()))
    }
}

/// A sparse set of address components.
///
/// Absent, empty and whitespace-only values are all "unset".
///
/// ```
/// use globalism_core::address::{AddressComponents, AddressField};
///
/// let parts = AddressComponents::new()
///     .with(AddressField::Road, "Main St")
///     .with(AddressField::HouseNumber, "123");
/// assert_eq!(parts.value("road"), "Main St");
/// assert_eq!(parts.value("attention"), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressComponents {
    pub recipient: Option<String>,
    pub house_number: Option<String>,
    pub house: Option<String>,
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub city_district: Option<String>,
    pub city: Option<String>,
    pub postal_town: Option<String>,
    pub county: Option<String>,
    pub state_code: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

impl AddressComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: AddressField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// The raw stored value, untrimmed.
    pub fn get(&self, field: AddressField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// The trimmed value of a template key; unknown keys and unset fields
    /// resolve to `""`.
    pub fn value(&self, key: &str) -> &str {
        AddressField::from_key(key)
            .and_then(|field| self.get(field))
            .map_or("", str::trim)
    }

    /// `true` when no field carries a non-blank value.
    pub fn is_blank(&self) -> bool {
        AddressField::ALL
            .into_iter()
            .all(|f| self.value(f.as_str()).is_empty())
    }

    fn slot(&self, field: AddressField) -> &Option<String> {
        match field {
            AddressField::Recipient => &self.recipient,
            AddressField::HouseNumber => &self.house_number,
            AddressField::House => &self.house,
            AddressField::Road => &self.road,
            AddressField::Neighbourhood => &self.neighbourhood,
            AddressField::Suburb => &self.suburb,
            AddressField::CityDistrict => &self.city_district,
            AddressField::City => &self.city,
            AddressField::PostalTown => &self.postal_town,
            AddressField::County => &self.county,
            AddressField::StateCode => &self.state_code,
            AddressField::State => &self.state,
            AddressField::Postcode => &self.postcode,
            AddressField::Country => &self.country,
            AddressField::CountryCode => &self.country_code,
        }
    }

    fn slot_mut(&mut self, field: AddressField) -> &mut Option<String> {
        match field {
            AddressField::Recipient => &mut self.recipient,
            AddressField::HouseNumber => &mut self.house_number,
            AddressField::House => &mut self.house,
            AddressField::Road => &mut self.road,
            AddressField::Neighbourhood => &mut self.neighbourhood,
            AddressField::Suburb => &mut self.suburb,
            AddressField::CityDistrict => &mut self.city_district,
            AddressField::City => &mut self.city,
            AddressField::PostalTown => &mut self.postal_town,
            AddressField::County => &mut self.county,
            AddressField::StateCode => &mut self.state_code,
            AddressField::State => &mut self.state,
            AddressField::Postcode => &mut self.postcode,
            AddressField::Country => &mut self.country,
            AddressField::CountryCode => &mut self.country_code,
        }
    }
}

impl<V: Into<String>> FromIterator<(AddressField, V)> for AddressComponents {
    fn from_iter<I: IntoIterator<Item = (AddressField, V)>>(iter: I) -> Self {
        let mut components = Self::default();
        for (field, value) in iter {
            components.set(field, value);
        }
        components
    }
}

impl Resolver for AddressComponents {
    fn resolve(&self, key: &str) -> String {
        self.value(key).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_the_closed_set() {
        for field in AddressField::ALL {
            assert_eq!(AddressField::from_key(field.as_str()), Some(field));
        }
        assert_eq!(AddressField::from_key("first"), None);
        assert!("attention".parse::<AddressField>().is_err());
    }

    #[test]
    fn canonical_order_matches_declaration_order() {
        let mut sorted = AddressField::ALL;
        sorted.sort();
        assert_eq!(sorted, AddressField::ALL);
    }

    #[test]
    fn whitespace_values_are_unset() {
        let parts = AddressComponents::new()
            .with(AddressField::City, "   ")
            .with(AddressField::Road, "  Elm St ");
        assert_eq!(parts.value("city"), "");
        assert_eq!(parts.value("road"), "Elm St");
        assert_eq!(parts.get(AddressField::Road), Some("  Elm St "));
        assert!(!parts.is_blank());
        assert!(AddressComponents::new().with(AddressField::City, " ").is_blank());
    }

    #[test]
    fn deserializes_sparse_json() {
        let parts: AddressComponents =
            serde_json::from_str(r#"{ "city": "Springfield", "postcode": "62701" }"#)
                .expect("valid components");
        assert_eq!(parts.value("city"), "Springfield");
        assert_eq!(parts.get(AddressField::Road), None);
    }
}
