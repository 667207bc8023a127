//! Language table - the fixed set of corpus languages
//!
//! Every language the API knows about is listed in [`LANGUAGES`], in the
//! order it is reported to clients. The table is static; which of these
//! actually have a corpus file on disk is decided by the resolver.

use serde::{Deserialize, Serialize};

/// Writing direction of a language's native script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for TextDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A language entry as reported by `/api/languages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    #[serde(rename = "name")]
    pub display_name: &'static str,
    #[serde(rename = "nativeName")]
    pub native_name: &'static str,
    #[serde(rename = "direction")]
    pub text_direction: TextDirection,
}

impl Language {
    const fn new(
        code: &'static str,
        display_name: &'static str,
        native_name: &'static str,
        text_direction: TextDirection,
    ) -> Self {
        Self {
            code,
            display_name,
            native_name,
            text_direction,
        }
    }

    /// Look up a language in the fixed table by its code.
    pub fn find(code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|lang| lang.code == code)
    }

    /// Which verse field a corpus in this language matches against.
    pub fn corpus_kind(code: &str) -> CorpusKind {
        match code {
            SOURCE_LANGUAGE => CorpusKind::Source,
            TRANSLITERATION => CorpusKind::Transliteration,
            _ => CorpusKind::Translation,
        }
    }
}

/// Code of the source-language corpus (Arabic text only).
pub const SOURCE_LANGUAGE: &str = "ar";

/// Code of the romanized pseudo-language corpus.
pub const TRANSLITERATION: &str = "transliteration";

/// The fixed set of supported languages, in reporting order.
pub static LANGUAGES: [Language; 12] = [
    Language::new("ar", "Arabic", "العربية", TextDirection::Rtl),
    Language::new("bn", "Bengali", "বাংলা", TextDirection::Ltr),
    Language::new("en", "English", "English", TextDirection::Ltr),
    Language::new("es", "Spanish", "Español", TextDirection::Ltr),
    Language::new("fr", "French", "Français", TextDirection::Ltr),
    Language::new("id", "Indonesian", "Bahasa Indonesia", TextDirection::Ltr),
    Language::new("ru", "Russian", "Русский", TextDirection::Ltr),
    Language::new("sv", "Swedish", "Svenska", TextDirection::Ltr),
    Language::new("tr", "Turkish", "Türkçe", TextDirection::Ltr),
    Language::new("ur", "Urdu", "اردو", TextDirection::Rtl),
    Language::new("zh", "Chinese", "中文", TextDirection::Ltr),
    Language::new(TRANSLITERATION, "Transliteration", "Transliteration", TextDirection::Ltr),
];

/// Shape of a corpus file, determined by the language it was loaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusKind {
    /// Source text only
    Source,
    /// Source text plus a `transliteration` field per verse
    Transliteration,
    /// Source text plus a `translation` field per verse
    Translation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_codes_are_unique() {
        for (i, lang) in LANGUAGES.iter().enumerate() {
            assert!(
                LANGUAGES[i + 1..].iter().all(|other| other.code != lang.code),
                "duplicate code {}",
                lang.code
            );
        }
    }

    #[test]
    fn test_find_and_direction() {
        assert_eq!(Language::find("ur").unwrap().text_direction, TextDirection::Rtl);
        assert_eq!(Language::find("en").unwrap().native_name, "English");
        assert!(Language::find("de").is_none());
    }

    #[test]
    fn test_corpus_kind() {
        assert_eq!(Language::corpus_kind("ar"), CorpusKind::Source);
        assert_eq!(Language::corpus_kind("transliteration"), CorpusKind::Transliteration);
        assert_eq!(Language::corpus_kind("bn"), CorpusKind::Translation);
    }

    #[test]
    fn test_language_json_shape() {
        let json = serde_json::to_value(Language::find("ar").unwrap()).unwrap();
        assert_eq!(json["code"], "ar");
        assert_eq!(json["name"], "Arabic");
        assert_eq!(json["nativeName"], "العربية");
        assert_eq!(json["direction"], "rtl");
    }
}
