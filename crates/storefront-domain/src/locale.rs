//! Request locale: language, country and currency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The language/country/currency triple governing field selection and
/// pricing for a single request.
///
/// A locale is derived per request and never mutated. Parsing is permissive:
/// missing parts stay empty and are filled from the configured default by
/// [`Locale::or_default`], so a bad locale string never fails a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Language tag, e.g. "en".
    pub language: String,
    /// ISO country code, e.g. "US".
    pub country: String,
    /// ISO 4217 currency code, e.g. "USD".
    pub currency: String,
}

impl Locale {
    /// Create a locale from its three parts.
    pub fn new(
        language: impl Into<String>,
        country: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
            currency: currency.into(),
        }
    }

    /// Parse a locale string.
    ///
    /// Accepts `"en_US@USD"`, `"en-US"` and plain `"en"`. Parts that are not
    /// present are left empty; combine with [`Locale::or_default`] to fill
    /// them in.
    pub fn parse(raw: &str) -> Self {
        let (tag, currency) = match raw.split_once('@') {
            Some((tag, currency)) => (tag, currency),
            None => (raw, ""),
        };

        let mut parts = tag.splitn(2, ['_', '-']);
        let language = parts.next().unwrap_or("").trim();
        let country = parts.next().unwrap_or("").trim();

        Self::new(language, country, currency.trim())
    }

    /// Fill empty parts from a default locale.
    pub fn or_default(mut self, default: &Locale) -> Self {
        if self.language.is_empty() {
            self.language = default.language.clone();
        }
        if self.country.is_empty() {
            self.country = default.country.clone();
        }
        if self.currency.is_empty() {
            self.currency = default.currency.clone();
        }
        self
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}@{}", self.language, self.country, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let locale = Locale::parse("en_US@USD");
        assert_eq!(locale.language, "en");
        assert_eq!(locale.country, "US");
        assert_eq!(locale.currency, "USD");
    }

    #[test]
    fn test_parse_hyphenated() {
        let locale = Locale::parse("de-DE");
        assert_eq!(locale.language, "de");
        assert_eq!(locale.country, "DE");
        assert_eq!(locale.currency, "");
    }

    #[test]
    fn test_parse_language_only() {
        let locale = Locale::parse("fr");
        assert_eq!(locale.language, "fr");
        assert_eq!(locale.country, "");
    }

    #[test]
    fn test_or_default_fills_missing_parts() {
        let default = Locale::new("en", "US", "USD");
        let locale = Locale::parse("de").or_default(&default);
        assert_eq!(locale.language, "de");
        assert_eq!(locale.country, "US");
        assert_eq!(locale.currency, "USD");
    }

    #[test]
    fn test_display_round_trip() {
        let locale = Locale::new("en", "GB", "GBP");
        assert_eq!(Locale::parse(&locale.to_string()), locale);
    }
}
