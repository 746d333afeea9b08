//! Country-code display index for the filter dropdown.

use isocountry::CountryCode;
use serde::Serialize;

/// Fallback label for codes the reference table does not know.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// One entry of a region's country index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    /// Upper-cased ISO 3166-1 alpha-2 code as stored.
    pub code: String,
    /// Human-readable country name, or [`UNKNOWN_COUNTRY`].
    pub name: String,
}

/// Resolve a stored alpha-2 code to its display name.
pub fn country_name(code: &str) -> &'static str {
    CountryCode::for_alpha2(code)
        .map(|country| country.name())
        .unwrap_or(UNKNOWN_COUNTRY)
}

/// Map distinct stored codes to display names, sorted by display name so the
/// presentation layer can render the list as-is. Codes with no match keep
/// their place in the ordering under the "Unknown" label.
pub fn country_index(codes: impl IntoIterator<Item = String>) -> Vec<CountryOption> {
    let mut index: Vec<CountryOption> = codes
        .into_iter()
        .map(|code| {
            let name = country_name(&code).to_string();
            CountryOption { code, name }
        })
        .collect();

    index.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_name_known_codes() {
        assert_eq!(country_name("SE"), "Sweden");
        assert_eq!(country_name("US"), "United States of America");
    }

    #[test]
    fn test_country_name_unknown_code() {
        assert_eq!(country_name("XX"), UNKNOWN_COUNTRY);
    }

    #[test]
    fn test_country_index_sorted_by_display_name() {
        let index = country_index(vec!["US".to_string(), "SE".to_string()]);
        assert_eq!(
            index,
            vec![
                CountryOption {
                    code: "SE".to_string(),
                    name: "Sweden".to_string()
                },
                CountryOption {
                    code: "US".to_string(),
                    name: "United States of America".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_country_index_unknown_sorts_by_label() {
        let index = country_index(vec![
            "ZZ".to_string(),
            "SE".to_string(),
            "UY".to_string(),
        ]);
        let names: Vec<&str> = index.iter().map(|c| c.name.as_str()).collect();
        // "Unknown" lands between "Sweden" and "Uruguay" alphabetically.
        assert_eq!(names, vec!["Sweden", "Unknown", "Uruguay"]);
    }
}
