//! UI string translation.
//!
//! Keys are the English strings themselves; a key with no entry for the user's
//! language renders unchanged.

use dioxus::prelude::*;
use threadline_shared::LanguageCode;

pub const MESSAGE_DELETED: &str = "This message was deleted...";
pub const POLL: &str = "Poll";
pub const POLL_CLOSED: &str = "Poll closed";
pub const VOTES: &str = "votes";
pub const ATTACHMENT: &str = "Attachment";
pub const VOICE_MESSAGE: &str = "Voice message";

/// Anything that can translate UI strings for the current user.
pub trait Translator {
    fn t(&self, key: &str) -> String;
    fn user_language(&self) -> LanguageCode;
}

const SPANISH: &[(&str, &str)] = &[
    (MESSAGE_DELETED, "Este mensaje fue eliminado..."),
    (POLL, "Encuesta"),
    (POLL_CLOSED, "Encuesta cerrada"),
    (VOTES, "votos"),
    (ATTACHMENT, "Archivo adjunto"),
    (VOICE_MESSAGE, "Mensaje de voz"),
];

const GERMAN: &[(&str, &str)] = &[
    (MESSAGE_DELETED, "Diese Nachricht wurde gelöscht..."),
    (POLL, "Umfrage"),
    (POLL_CLOSED, "Umfrage beendet"),
    (VOTES, "Stimmen"),
    (ATTACHMENT, "Anhang"),
    (VOICE_MESSAGE, "Sprachnachricht"),
];

fn catalog(language: &LanguageCode) -> &'static [(&'static str, &'static str)] {
    let primary = language.as_str().split('-').next().unwrap_or_default();
    match primary {
        "es" => SPANISH,
        "de" => GERMAN,
        _ => &[],
    }
}

/// Translate `key` into `language` using the built-in catalogs.
pub fn translate(language: &LanguageCode, key: &str) -> String {
    catalog(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| (*v).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Translator over the built-in catalogs for a fixed language.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticTranslator {
    pub language: LanguageCode,
}

impl Translator for StaticTranslator {
    fn t(&self, key: &str) -> String {
        translate(&self.language, key)
    }

    fn user_language(&self) -> LanguageCode {
        self.language.clone()
    }
}

/// Translation context provided to the app
#[derive(Clone, Copy)]
pub struct TranslationContext {
    pub language: Signal<LanguageCode>,
}

impl Translator for TranslationContext {
    fn t(&self, key: &str) -> String {
        translate(&self.language.read(), key)
    }

    fn user_language(&self) -> LanguageCode {
        self.language.read().clone()
    }
}

/// Provider component that sets up the translation context
#[component]
pub fn TranslationProvider(language: LanguageCode, children: Element) -> Element {
    let mut language_sig = use_signal(|| language.clone());
    if *language_sig.peek() != language {
        language_sig.set(language.clone());
    }

    use_context_provider(|| TranslationContext {
        language: language_sig,
    });

    children
}
