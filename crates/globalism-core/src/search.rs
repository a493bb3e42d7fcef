// crates/globalism-core/src/search.rs
use crate::common::DbStats;
use crate::model::{Country, CountryDb, CountryGroup, Language};
use crate::text::{digits_only, fold_key};
use crate::traits::CountryLookup;

impl CountryLookup for CountryDb {
    fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            languages: self.languages.len(),
            groups: self.groups.len(),
        }
    }

    fn countries(&self) -> &[Country] {
        &self.countries
    }

    fn languages(&self) -> &[Language] {
        &self.languages
    }

    fn groups(&self) -> &[CountryGroup] {
        &self.groups
    }

    fn find_country_by_alpha2(&self, alpha2: &str) -> Option<&Country> {
        // Linear scan of countries is fast (N < 300)
        self.countries
            .iter()
            .find(|c| c.alpha2.eq_ignore_ascii_case(alpha2))
    }

    fn find_country_by_alpha3(&self, alpha3: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.alpha3.eq_ignore_ascii_case(alpha3))
    }

    fn find_country_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.find_country_by_alpha2(code)
            .or_else(|| self.find_country_by_alpha3(code))
    }

    fn find_countries_by_group(&self, group_id: &str) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.is_member_of(group_id))
            .collect()
    }

    fn find_group_by_id(&self, id: &str) -> Option<&CountryGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    fn find_language_by_code(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    fn find_countries_by_phone_code(&self, prefix: &str) -> Vec<&Country> {
        let wanted = digits_only(prefix);
        if wanted.is_empty() {
            return Vec::new();
        }
        self.countries
            .iter()
            .filter(|c| digits_only(c.phone_code()) == wanted)
            .collect()
    }

    fn find_countries_by_substring(&self, substr: &str) -> Vec<&Country> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.countries
            .iter()
            .filter(|c| {
                std::iter::once(c.name.as_str())
                    .chain(c.official_name.as_deref())
                    .chain(c.native_names.iter().map(String::as_str))
                    .any(|name| fold_key(name).contains(&q))
            })
            .collect()
    }

    fn languages_for_country<'a>(&'a self, country: &Country) -> Vec<&'a Language> {
        country
            .languages
            .iter()
            .filter_map(|code| self.find_language_by_code(code))
            .collect()
    }
}
