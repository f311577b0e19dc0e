//! Locale tags and per-language translated message text.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A validated language tag such as `en`, `pt` or `zh-TW`.
///
/// Primary subtag is 2-3 lowercase ASCII letters, optionally followed by a
/// single `-` and a 2-4 character alphanumeric region/script subtag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn parse(tag: &str) -> Result<Self, ModelError> {
        let tag = tag.trim();
        let (primary, region) = match tag.split_once('-') {
            Some((p, r)) => (p, Some(r)),
            None => (tag, None),
        };

        let primary_ok =
            (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_lowercase());
        let region_ok = region.map_or(true, |r| {
            (2..=4).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric())
        });

        if primary_ok && region_ok {
            Ok(Self(tag.to_string()))
        } else {
            Err(ModelError::InvalidLanguageCode(tag.to_string()))
        }
    }

    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which a message's translated text is stored, e.g. `en_text`.
    pub fn text_key(&self) -> String {
        format!("{}_text", self.0)
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

/// Translated variants of a message, keyed like `"<lang>_text"`.
///
/// The payload may also carry bookkeeping keys such as `language`; those are
/// kept but never matched by [`I18n::text_for`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct I18n(HashMap<String, String>);

impl I18n {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, language: &LanguageCode, text: impl Into<String>) -> Self {
        self.0.insert(language.text_key(), text.into());
        self
    }

    /// Translated text for `language`, if present and non-empty.
    pub fn text_for(&self, language: &LanguageCode) -> Option<&str> {
        self.0
            .get(&language.text_key())
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_tags() {
        for tag in ["en", "es", "fil", "zh-TW", "pt-BR", "sr-Latn"] {
            assert!(LanguageCode::parse(tag).is_ok(), "{tag} should parse");
        }
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        for tag in ["", "e", "EN", "english", "en_US", "en-", "en-US-x", "../x"] {
            assert!(
                matches!(LanguageCode::parse(tag), Err(ModelError::InvalidLanguageCode(_))),
                "{tag} should be rejected"
            );
        }
    }

    #[test]
    fn test_text_key_format() {
        let code = LanguageCode::parse("zh-TW").unwrap();
        assert_eq!(code.text_key(), "zh-TW_text");
    }

    #[test]
    fn test_text_for_ignores_empty_and_other_languages() {
        let en = LanguageCode::english();
        let fr = LanguageCode::parse("fr").unwrap();
        let i18n = I18n::new().with_text(&en, "hola").with_text(&fr, "");

        assert_eq!(i18n.text_for(&en), Some("hola"));
        assert_eq!(i18n.text_for(&fr), None);
        assert_eq!(i18n.text_for(&LanguageCode::parse("de").unwrap()), None);
    }

    #[test]
    fn test_i18n_deserializes_flat_map() {
        let i18n: I18n =
            serde_json::from_str(r#"{"en_text":"hello","nl_text":"hallo","language":"nl"}"#)
                .unwrap();
        assert_eq!(i18n.text_for(&LanguageCode::parse("nl").unwrap()), Some("hallo"));
        assert_eq!(i18n.text_for(&LanguageCode::parse("la").unwrap()), None);
    }

    #[test]
    fn test_language_code_serde_validates() {
        let ok: LanguageCode = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(ok.as_str(), "es");
        assert!(serde_json::from_str::<LanguageCode>("\"Spanish\"").is_err());
    }
}
