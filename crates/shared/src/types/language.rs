//! Supported site languages and localized text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language the site and portal are published in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
    /// Portuguese.
    Pt,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Pt];

    /// Returns the ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Pt => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "pt" => Ok(Self::Pt),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

/// A piece of text available in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    /// English text.
    pub en: &'static str,
    /// French text.
    pub fr: &'static str,
    /// Portuguese text.
    pub pt: &'static str,
}

impl LocalizedText {
    /// Creates localized text from its three translations.
    #[must_use]
    pub const fn new(en: &'static str, fr: &'static str, pt: &'static str) -> Self {
        Self { en, fr, pt }
    }

    /// Returns the text for a language.
    #[must_use]
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Fr => self.fr,
            Language::Pt => self.pt,
        }
    }

    /// Returns true if every translation is non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Language::ALL
            .iter()
            .all(|lang| !self.get(*lang).trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("en").unwrap(), Language::En);
        assert_eq!(Language::from_str("FR").unwrap(), Language::Fr);
        assert_eq!(Language::from_str(" pt ").unwrap(), Language::Pt);
        assert!(Language::from_str("es").is_err());
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Fr).unwrap(), "\"fr\"");
        let lang: Language = serde_json::from_str("\"pt\"").unwrap();
        assert_eq!(lang, Language::Pt);
    }

    #[test]
    fn test_localized_text_get() {
        let text = LocalizedText::new("Hello", "Bonjour", "Olá");
        assert_eq!(text.get(Language::En), "Hello");
        assert_eq!(text.get(Language::Fr), "Bonjour");
        assert_eq!(text.get(Language::Pt), "Olá");
        assert!(text.is_complete());
    }

    #[test]
    fn test_localized_text_incomplete() {
        let text = LocalizedText::new("Hello", "", "Olá");
        assert!(!text.is_complete());
    }
}
