// crates/globalism-core/src/traits.rs
use crate::common::DbStats;
use crate::model::{Country, CountryGroup, Language};
use crate::text::fold_key;

/// The phone conventions of a country record.
///
/// The phone engine only ever sees a record through this trait, so it works
/// the same for dataset entries and for ad-hoc records built by callers.
pub trait PhoneConventions {
    /// Mask with `#` digit slots, e.g. `"(###) ###-####"`.
    fn phone_format(&self) -> Option<&str>;
    /// Escaped validation pattern.
    fn phone_regexp(&self) -> Option<&str>;
    /// Calling code, e.g. `"+1"`.
    fn phone_country_code(&self) -> Option<&str>;
}

/// The address conventions of a country record.
pub trait AddressConventions {
    /// Ordered template lines; `None` when the country has no known format.
    fn address_format(&self) -> Option<&[String]>;
}

/// Loose name comparison for countries, languages and groups.
///
/// Users type "cote d'ivoire" or "ALAND" and expect to hit "Côte d'Ivoire"
/// and "Åland Islands". Both sides go through [`fold_key`] first, so accents
/// and letter case never decide a match. [`Country`], [`Language`] and
/// [`CountryGroup`] implement it through their English `name`.
///
/// ```rust
/// use globalism_core::{Country, NameMatch};
///
/// let ci = Country {
///     alpha2: "CI".into(),
///     name: "Côte d'Ivoire".into(),
///     ..Default::default()
/// };
/// assert!(ci.is_named("COTE D'IVOIRE"));
/// assert!(ci.name_contains("ivoire"));
/// assert!(!ci.is_named("ivoire"));
/// ```
pub trait NameMatch {
    /// The name compared against queries.
    fn name_str(&self) -> &str;

    /// Whole-name match.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// `q` appears somewhere in the name, e.g. `"korea"` in both Koreas.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Language {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for CountryGroup {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Read-only lookups over the reference tables.
pub trait CountryLookup {
    fn stats(&self) -> DbStats;

    /// Returns a slice of all countries in the database.
    ///
    /// # Example
    ///
    /// ```
    /// use globalism_core::{CountryDb, CountryLookup};
    ///
    /// let db = CountryDb::load().unwrap();
    /// for country in db.countries().iter().take(5) {
    ///     println!("- {} ({})", country.name(), country.alpha2());
    /// }
    /// ```
    fn countries(&self) -> &[Country];
    fn languages(&self) -> &[Language];
    fn groups(&self) -> &[CountryGroup];

    /// Find a country by alpha-2 code, case-insensitive (e.g. "DE", "us").
    fn find_country_by_alpha2(&self, alpha2: &str) -> Option<&Country>;
    /// Find a country by alpha-3 code, case-insensitive (e.g. "DEU").
    fn find_country_by_alpha3(&self, alpha3: &str) -> Option<&Country>;
    /// Alpha-2 first, then alpha-3.
    fn find_country_by_code(&self, code: &str) -> Option<&Country>;

    /// Countries that list `group_id` among their groups.
    fn find_countries_by_group(&self, group_id: &str) -> Vec<&Country>;
    fn find_group_by_id(&self, id: &str) -> Option<&CountryGroup>;
    fn find_language_by_code(&self, code: &str) -> Option<&Language>;

    /// Find countries sharing a calling code (e.g. "+1", "44").
    fn find_countries_by_phone_code(&self, prefix: &str) -> Vec<&Country>;
    /// Accent-insensitive search over English, official and native names.
    fn find_countries_by_substring(&self, substr: &str) -> Vec<&Country>;

    /// The country's languages in declaration order; unknown codes are skipped.
    fn languages_for_country<'a>(&'a self, country: &Country) -> Vec<&'a Language>;
}
