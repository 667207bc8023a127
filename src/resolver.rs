//! Language resolution with a fixed fallback chain
//!
//! A requested code is honoured when it names a language from the table and
//! its corpus file is present. Otherwise the first present language among
//! `en`, `ar`, `bn` wins, and `en` is returned as a last resort even when its
//! file is missing (the cache then reports the miss).

use std::sync::Arc;
use crate::corpus::CorpusSource;
use crate::language::{Language, TextDirection, LANGUAGES};

/// Fallback order tried when the requested language is unavailable.
pub const FALLBACK_CHAIN: [&str; 3] = ["en", "ar", "bn"];

/// Last-resort language, returned without checking the disk.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Clone)]
pub struct LanguageResolver {
    source: Arc<dyn CorpusSource>,
}

impl LanguageResolver {
    pub fn new(source: Arc<dyn CorpusSource>) -> Self {
        Self { source }
    }

    /// Whether the code is in the table and has a corpus file on disk.
    pub async fn is_supported(&self, code: &str) -> bool {
        Language::find(code).is_some() && self.source.has_corpus(code).await
    }

    /// Map a requested code to the language that will actually be served.
    ///
    /// Codes are matched exactly; `" fr"` is not `fr`.
    pub async fn resolve(&self, requested: Option<&str>) -> String {
        if let Some(code) = requested.filter(|c| !c.is_empty()) {
            if self.is_supported(code).await {
                return code.to_string();
            }
            tracing::debug!("Language '{}' unavailable, falling back", code);
        }

        for code in FALLBACK_CHAIN {
            if self.is_supported(code).await {
                return code.to_string();
            }
        }
        DEFAULT_LANGUAGE.to_string()
    }

    /// The full language table. Entries are listed whether or not their
    /// corpus file is present.
    pub fn list_supported(&self) -> &'static [Language] {
        &LANGUAGES
    }

    pub fn direction(&self, code: &str) -> TextDirection {
        Language::find(code)
            .map(|lang| lang.text_direction)
            .unwrap_or(TextDirection::Ltr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{corpus_file_name, CorpusLoader};
    use tempfile::TempDir;

    fn resolver_with(files: &[&str]) -> (LanguageResolver, TempDir) {
        let dir = TempDir::new().unwrap();
        for file in files {
            std::fs::write(dir.path().join(file), "{\"surahs\": []}").unwrap();
        }
        let source: Arc<dyn CorpusSource> = Arc::new(CorpusLoader::new(dir.path()));
        (LanguageResolver::new(source), dir)
    }

    #[tokio::test]
    async fn test_supported_codes_resolve_to_themselves() {
        let files: Vec<String> = LANGUAGES.iter().map(|l| corpus_file_name(l.code)).collect();
        let names: Vec<&str> = files.iter().map(String::as_str).collect();
        let (resolver, _dir) = resolver_with(&names);

        for language in LANGUAGES.iter() {
            assert_eq!(resolver.resolve(Some(language.code)).await, language.code);
        }
    }

    #[tokio::test]
    async fn test_codes_are_not_trimmed() {
        let (resolver, _dir) = resolver_with(&["quran_en.json", "quran_fr.json"]);
        assert_eq!(resolver.resolve(Some("fr")).await, "fr");
        assert_eq!(resolver.resolve(Some(" fr")).await, "en");
        assert_eq!(resolver.resolve(Some("fr ")).await, "en");
        assert!(!resolver.is_supported(" fr").await);
    }

    #[tokio::test]
    async fn test_fallback_order() {
        let (resolver, _dir) = resolver_with(&["quran.json", "quran_bn.json", "quran_en.json"]);
        assert_eq!(resolver.resolve(Some("de")).await, "en");
        assert_eq!(resolver.resolve(None).await, "en");
        assert_eq!(resolver.resolve(Some("")).await, "en");

        let (resolver, _dir) = resolver_with(&["quran.json", "quran_bn.json"]);
        assert_eq!(resolver.resolve(Some("fr")).await, "ar");

        let (resolver, _dir) = resolver_with(&["quran_bn.json"]);
        assert_eq!(resolver.resolve(Some("zh")).await, "bn");
    }

    #[tokio::test]
    async fn test_last_resort_is_english_even_without_file() {
        let (resolver, _dir) = resolver_with(&[]);
        assert_eq!(resolver.resolve(Some("ru")).await, "en");
        assert_eq!(resolver.resolve(None).await, "en");
    }

    #[tokio::test]
    async fn test_unknown_code_with_file_is_not_supported() {
        let (resolver, _dir) = resolver_with(&["quran_de.json", "quran_ar.json"]);
        assert!(!resolver.is_supported("de").await);
        assert_eq!(resolver.resolve(Some("de")).await, "en");
    }

    #[test]
    fn test_list_supported_ignores_disk() {
        let (resolver, _dir) = resolver_with(&[]);
        let languages = resolver.list_supported();
        assert_eq!(languages.len(), 12);
        assert_eq!(languages[0].code, "ar");
        assert_eq!(languages[11].code, "transliteration");
    }

    #[test]
    fn test_direction() {
        let (resolver, _dir) = resolver_with(&[]);
        assert_eq!(resolver.direction("ar"), TextDirection::Rtl);
        assert_eq!(resolver.direction("xx"), TextDirection::Ltr);
    }
}
