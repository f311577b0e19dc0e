//! Client settings persisted through [`crate::storage`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use threadline_shared::LanguageCode;

use crate::storage;

const SETTINGS_KEY: &str = "settings";

/// Environment variable that overrides the stored UI language on desktop.
pub const LANGUAGE_ENV: &str = "THREADLINE_LANG";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientSettings {
    /// Language used for UI strings and for picking translated message text.
    pub language: String,
    /// How long a message stays highlighted after jumping to it.
    pub highlight_duration_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            highlight_duration_ms: 2_000,
        }
    }
}

impl ClientSettings {
    /// Load settings from storage, applying the environment override on desktop.
    ///
    /// Unreadable settings are logged and replaced by defaults.
    pub fn load() -> Self {
        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut settings = match storage::load::<ClientSettings>(SETTINGS_KEY) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let defaults = Self::default();
                if let Err(e) = defaults.save() {
                    crate::log_warn!("Could not write default settings: {e:#}");
                }
                defaults
            }
            Err(e) => {
                crate::log_warn!("Ignoring stored settings: {e:#}");
                Self::default()
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(lang) = std::env::var(LANGUAGE_ENV) {
            settings.language = lang;
        }

        settings
    }

    pub fn save(&self) -> Result<()> {
        storage::save(SETTINGS_KEY, self)
    }

    pub fn language_code(&self) -> Result<LanguageCode> {
        LanguageCode::parse(&self.language)
            .with_context(|| format!("configured language {:?}", self.language))
    }

    /// The configured language, or English when the configured tag is invalid.
    pub fn language_or_default(&self) -> LanguageCode {
        self.language_code().unwrap_or_else(|e| {
            crate::log_warn!("{e:#}; falling back to English");
            LanguageCode::english()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: ClientSettings = serde_json::from_str(r#"{"language":"es"}"#).unwrap();
        assert_eq!(settings.language, "es");
        assert_eq!(settings.highlight_duration_ms, 2_000);
    }

    #[test]
    fn test_language_code_validation() {
        let settings = ClientSettings {
            language: "pt-BR".into(),
            ..Default::default()
        };
        assert_eq!(settings.language_code().unwrap().as_str(), "pt-BR");

        let bad = ClientSettings {
            language: "Portuguese".into(),
            ..Default::default()
        };
        assert!(bad.language_code().is_err());
        assert_eq!(bad.language_or_default(), LanguageCode::english());
    }
}
