//! Parsing and display rules shared by the extractor and the export preparer.

use std::sync::OnceLock;

use regex::Regex;

/// Placeholder used when an empty name must be anonymized.
pub const ANONYMIZED_PLACEHOLDER: &str = "Anonymisiert";

/// Anonymizes a full name: "Max Mustermann" → "Max M.".
/// Single-token names are returned unchanged; an empty name maps to the
/// fixed placeholder.
pub fn anonymize_name(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => ANONYMIZED_PLACEHOLDER.to_string(),
        [single] => (*single).to_string(),
        [first, .., last] => {
            let initial = last.chars().next().unwrap_or_default();
            format!("{first} {initial}.")
        }
    }
}

fn postal_city_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{5}\s+([^,]+)").expect("postal city regex"))
}

/// Extracts a city from a free-form address.
///
/// Heuristic, in order: (1) the token after a 5-digit postal code up to the
/// next comma, (2) the second comma-delimited segment, (3) the whole address
/// verbatim. Empty input yields an empty string.
pub fn extract_city_from_address(address: &str) -> String {
    if address.trim().is_empty() {
        return String::new();
    }

    if let Some(captures) = postal_city_regex().captures(address) {
        return captures[1].trim().to_string();
    }

    let parts: Vec<&str> = address.split(',').collect();
    if parts.len() >= 2 {
        return parts[1].trim().to_string();
    }

    address.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymize_two_tokens() {
        assert_eq!(anonymize_name("Max Mustermann"), "Max M.");
    }

    #[test]
    fn test_anonymize_many_tokens_uses_last() {
        assert_eq!(anonymize_name("Anna Maria Schmidt"), "Anna S.");
    }

    #[test]
    fn test_anonymize_single_token_unchanged() {
        assert_eq!(anonymize_name("Max"), "Max");
    }

    #[test]
    fn test_anonymize_empty_uses_placeholder() {
        assert_eq!(anonymize_name(""), ANONYMIZED_PLACEHOLDER);
        assert_eq!(anonymize_name("   "), ANONYMIZED_PLACEHOLDER);
    }

    #[test]
    fn test_extract_city_postal_code_path() {
        assert_eq!(
            extract_city_from_address("Musterstraße 123, 12345 Berlin, Deutschland"),
            "Berlin"
        );
    }

    #[test]
    fn test_extract_city_comma_fallback() {
        assert_eq!(extract_city_from_address("Hauptstr 1, Hamburg"), "Hamburg");
    }

    #[test]
    fn test_extract_city_verbatim_fallback() {
        assert_eq!(extract_city_from_address("München"), "München");
    }

    #[test]
    fn test_extract_city_empty() {
        assert_eq!(extract_city_from_address(""), "");
    }
}
