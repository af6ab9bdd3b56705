//! Authored guidance text. Each block is static data compiled into the binary.

pub mod climate;
pub mod health;
pub mod schemes;
pub mod welcome;

use crate::models::Language;

/// One guidance block in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    en: &'static str,
    hi: Option<&'static str>,
    te: Option<&'static str>,
}

impl LocalizedText {
    pub const fn new(en: &'static str, hi: &'static str, te: &'static str) -> Self {
        Self {
            en,
            hi: Some(hi),
            te: Some(te),
        }
    }

    pub const fn english_only(en: &'static str) -> Self {
        Self {
            en,
            hi: None,
            te: None,
        }
    }

    /// Text in `language`, or the English block when no translation exists.
    pub fn get(&self, language: Language) -> &'static str {
        let translated = match language {
            Language::En => None,
            Language::Hi => self.hi,
            Language::Te => self.te,
        };
        translated.unwrap_or(self.en)
    }

    pub fn has_translation(&self, language: Language) -> bool {
        match language {
            Language::En => true,
            Language::Hi => self.hi.is_some(),
            Language::Te => self.te.is_some(),
        }
    }
}
