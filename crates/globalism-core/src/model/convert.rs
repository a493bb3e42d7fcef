// crates/globalism-core/src/model/convert.rs
use crate::model::domain::{Country, CountryDb, CountryGroup, GroupingType, Language};
use crate::raw::{CountryGroupRaw, CountryRaw, DatasetRaw, LanguageRaw};

/// **Standard Converter:** Raw -> Domain.
///
/// Normalizes the dataset so that "absent" has a single representation:
/// empty or whitespace-only strings and empty template lists become `None`,
/// codes are upper-cased and template lines are trimmed (blank lines are kept,
/// so a template of blank lines still formats to no lines rather than `None`).
pub fn from_raw(raw: DatasetRaw) -> CountryDb {
    let db = CountryDb {
        countries: raw.countries.into_iter().map(country_from_raw).collect(),
        languages: raw.languages.into_iter().map(language_from_raw).collect(),
        groups: raw.groups.into_iter().map(group_from_raw).collect(),
    };
    log::debug!(
        "Built country db: {} countries, {} languages, {} groups",
        db.countries.len(),
        db.languages.len(),
        db.groups.len()
    );
    db
}

fn country_from_raw(c: CountryRaw) -> Country {
    let address_format = c
        .address_format
        .filter(|lines| !lines.is_empty())
        .map(|lines| lines.iter().map(|l| l.trim().to_owned()).collect::<Vec<_>>());

    Country {
        alpha2: c.alpha2.trim().to_ascii_uppercase(),
        alpha3: c.alpha3.trim().to_ascii_uppercase(),
        name: c.name,
        official_name: non_empty(c.official_name),
        native_names: c.native_names,
        languages: c.languages,
        groups: c.groups,
        currency: non_empty(c.currency),
        currency_symbol: non_empty(c.currency_symbol),
        phone_country_code: non_empty(c.phone_country_code),
        phone_regexp: non_empty(c.phone_regexp),
        phone_format: non_empty(c.phone_format),
        postal_code_regexp: non_empty(c.postal_code_regexp),
        postal_code_format: non_empty(c.postal_code_format),
        tld: non_empty(c.tld),
        flag: non_empty(c.flag),
        address_format,
    }
}

fn language_from_raw(l: LanguageRaw) -> Language {
    Language {
        code: l.code,
        name: l.name,
        native_name: l.native_name,
        rtl: l.rtl.unwrap_or(false),
        script: non_empty(l.script),
    }
}

fn group_from_raw(g: CountryGroupRaw) -> CountryGroup {
    CountryGroup {
        kind: GroupingType::from_code(&g.kind),
        id: g.id,
        name: g.name,
        description: non_empty(g.description),
        members: g.members,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_country(json: &str) -> CountryRaw {
        serde_json::from_str(json).expect("valid raw country")
    }

    #[test]
    fn empty_strings_become_absent() {
        let c = country_from_raw(raw_country(
            r#"{ "alpha2": "xx", "alpha3": "xxx", "name": "Test",
                 "currency": "", "phoneFormat": "  ", "phoneRegexp": "" }"#,
        ));
        assert_eq!(c.alpha2, "XX");
        assert_eq!(c.alpha3, "XXX");
        assert_eq!(c.currency, None);
        assert_eq!(c.phone_format, None);
        assert_eq!(c.phone_regexp, None);
    }

    #[test]
    fn template_lines_are_trimmed_and_kept() {
        let c = country_from_raw(raw_country(
            r#"{ "alpha2": "XX", "alpha3": "XXX", "name": "Test",
                 "addressFormat": ["  {{road}} ", "", "   "] }"#,
        ));
        assert_eq!(
            c.address_format,
            Some(vec!["{{road}}".to_owned(), String::new(), String::new()])
        );

        let c = country_from_raw(raw_country(
            r#"{ "alpha2": "XX", "alpha3": "XXX", "name": "Test", "addressFormat": [] }"#,
        ));
        assert_eq!(c.address_format, None);
    }

    #[test]
    fn blank_only_template_still_formats_to_no_lines() {
        use crate::address::AddressComponents;

        let c = country_from_raw(raw_country(
            r#"{ "alpha2": "XX", "alpha3": "XXX", "name": "Test", "addressFormat": ["", " "] }"#,
        ));
        assert_eq!(c.format_address_lines(&AddressComponents::new()), Some(vec![]));
    }

    #[test]
    fn unknown_grouping_type_is_other() {
        assert_eq!(GroupingType::from_code("MILITARY_ALLIANCE"), GroupingType::MilitaryAlliance);
        assert_eq!(GroupingType::from_code("SPACE_AGENCY"), GroupingType::Other);
    }
}
