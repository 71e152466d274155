//! Static country and city reference data
//!
//! Read-only for the process lifetime. The form controller receives a
//! [`ReferenceData`] at construction, so tests can substitute alternate
//! datasets without touching the core logic.

use std::collections::HashMap;

/// A selectable country
#[derive(Debug, Clone)]
pub struct Country {
    pub code: String,
    pub display_name: String,
    pub dial_code: String,
}

/// Immutable country/city lookup tables
#[derive(Debug, Clone)]
pub struct ReferenceData {
    countries: Vec<Country>,
    cities_by_country: HashMap<String, Vec<String>>,
}

impl ReferenceData {
    pub fn new(countries: Vec<Country>, cities_by_country: HashMap<String, Vec<String>>) -> Self {
        Self {
            countries,
            cities_by_country,
        }
    }

    /// The shipped dataset
    pub fn builtin() -> Self {
        let countries = [
            ("US", "United States", "+1"),
            ("IN", "India", "+91"),
            ("UK", "United Kingdom", "+44"),
            ("CA", "Canada", "+1"),
            ("AU", "Australia", "+61"),
        ]
        .into_iter()
        .map(|(code, display_name, dial_code)| Country {
            code: code.to_string(),
            display_name: display_name.to_string(),
            dial_code: dial_code.to_string(),
        })
        .collect();

        let cities_by_country = [
            ("US", ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"]),
            ("IN", ["Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata"]),
            ("UK", ["London", "Manchester", "Birmingham", "Liverpool", "Leeds"]),
            ("CA", ["Toronto", "Vancouver", "Montreal", "Calgary", "Ottawa"]),
            ("AU", ["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide"]),
        ]
        .into_iter()
        .map(|(code, cities)| {
            (
                code.to_string(),
                cities.into_iter().map(str::to_string).collect(),
            )
        })
        .collect();

        Self::new(countries, cities_by_country)
    }

    /// Countries in display order
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Look up a country by its code
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == code)
    }

    /// Cities for a country code; empty for an unknown or empty code
    pub fn cities_for(&self, code: &str) -> &[String] {
        self.cities_by_country
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_has_five_countries_in_order() {
        let reference = ReferenceData::builtin();
        let codes: Vec<&str> = reference.countries().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["US", "IN", "UK", "CA", "AU"]);
    }

    #[test]
    fn test_builtin_display_names_and_dial_codes() {
        let reference = ReferenceData::builtin();

        let us = reference.country("US").unwrap();
        assert_eq!(us.display_name, "United States");
        assert_eq!(us.dial_code, "+1");

        let india = reference.country("IN").unwrap();
        assert_eq!(india.display_name, "India");
        assert_eq!(india.dial_code, "+91");
    }

    #[test]
    fn test_builtin_cities_per_country() {
        let reference = ReferenceData::builtin();

        assert_eq!(
            reference.cities_for("US"),
            ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"]
        );
        for country in reference.countries() {
            assert_eq!(reference.cities_for(&country.code).len(), 5);
        }
    }

    #[test]
    fn test_unknown_or_empty_code_yields_no_cities() {
        let reference = ReferenceData::builtin();
        assert!(reference.cities_for("ZZ").is_empty());
        assert!(reference.cities_for("").is_empty());
    }

    #[test]
    fn test_unknown_country_lookup_is_none() {
        assert!(ReferenceData::builtin().country("ZZ").is_none());
    }
}
