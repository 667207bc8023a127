//! Verse search
//!
//! Substring matching over a loaded document. Which verse fields are
//! consulted depends on the language the document was loaded for:
//! - `ar`: case-sensitive match on `text`
//! - `transliteration`: case-insensitive on `transliteration`, or case-sensitive on `text`
//! - translations: case-insensitive on `translation`, or case-sensitive on `text`
//!
//! Results keep the document's surah order and each surah's verse order.

use serde::Serialize;
use crate::{Error, Result};
use crate::corpus::{Document, SurahSummary, Verse};
use crate::language::{CorpusKind, Language};

/// Shortest accepted query, counted in characters after trimming.
pub const MIN_QUERY_CHARS: usize = 3;

/// Matching verses of one surah.
#[derive(Debug, Clone, Serialize)]
pub struct SurahMatches {
    pub surah: SurahSummary,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub results: Vec<SurahMatches>,
    pub total: usize,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Precomputed matcher for one query against one corpus kind.
struct Matcher<'q> {
    kind: CorpusKind,
    query: &'q str,
    lowered: String,
}

impl<'q> Matcher<'q> {
    fn new(kind: CorpusKind, query: &'q str) -> Self {
        Self {
            kind,
            query,
            lowered: query.to_lowercase(),
        }
    }

    fn matches(&self, verse: &Verse) -> bool {
        let field = match self.kind {
            CorpusKind::Source => None,
            CorpusKind::Transliteration => verse.transliteration.as_deref(),
            CorpusKind::Translation => verse.translation.as_deref(),
        };

        field.is_some_and(|f| f.to_lowercase().contains(&self.lowered))
            || verse.text.contains(self.query)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SearchEngine;

impl SearchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Search a document loaded for `language`.
    ///
    /// The query is length-checked after trimming but matched as given.
    pub fn search(&self, document: &Document, language: &str, query: &str) -> Result<SearchResults> {
        validate_query(query)?;

        let matcher = Matcher::new(Language::corpus_kind(language), query);
        let mut results = Vec::new();
        let mut total = 0;

        for surah in &document.surahs {
            let verses: Vec<Verse> = surah
                .verses
                .iter()
                .filter(|verse| matcher.matches(verse))
                .cloned()
                .collect();

            if verses.is_empty() {
                continue;
            }

            total += verses.len();
            results.push(SurahMatches {
                surah: surah.summary(),
                verses,
            });
        }

        tracing::debug!(
            "Search '{}' in '{}': {} verses across {} surahs",
            query,
            language,
            total,
            results.len()
        );

        Ok(SearchResults { results, total })
    }
}

/// Reject queries shorter than [`MIN_QUERY_CHARS`] once trimmed.
pub fn validate_query(query: &str) -> Result<()> {
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return Err(Error::InvalidQuery(format!(
            "Search query must be at least {} characters long.",
            MIN_QUERY_CHARS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::corpus::Surah;

    fn verse(id: u32, text: &str, translation: Option<&str>, transliteration: Option<&str>) -> Verse {
        Verse {
            id,
            text: text.to_string(),
            translation: translation.map(String::from),
            transliteration: transliteration.map(String::from),
        }
    }

    fn surah(id: u32, transliteration: &str, verses: Vec<Verse>) -> Surah {
        Surah {
            id,
            name: format!("surah-{}", id),
            transliteration: transliteration.to_string(),
            translation: Some(format!("translation-{}", id)),
            kind: "meccan".to_string(),
            total_verses: verses.len() as u32,
            verses,
        }
    }

    fn translated_document() -> Document {
        Document {
            surahs: vec![
                surah(1, "Al-Fatihah", vec![
                    verse(1, "بِسْمِ", Some("In the name of God"), None),
                ]),
                surah(2, "Al-Baqarah", vec![
                    verse(254, "يَٰٓأَيُّهَا", Some("O you who have believed, spend"), None),
                    verse(255, "ٱللَّهُ لَآ إِلَٰهَ", Some("Allah! There is no god except Him"), None),
                    verse(256, "لَآ إِكْرَاهَ", Some("There shall be no compulsion; ALLAH hears"), None),
                ]),
                surah(3, "Ali 'Imran", vec![
                    verse(1, "الم", Some("Alif, Lam, Meem"), None),
                    verse(2, "ٱللَّهُ", Some("Allah - there is no deity except Him"), None),
                ]),
            ],
        }
    }

    #[test]
    fn test_query_length() {
        let engine = SearchEngine::new();
        let doc = translated_document();

        let err = engine.search(&doc, "en", "ab").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuery);
        assert_eq!(engine.search(&doc, "en", "   ab  ").unwrap_err().kind(), ErrorKind::InvalidQuery);
        assert!(engine.search(&doc, "en", "abc").is_ok());
        // Characters, not bytes
        assert!(engine.search(&doc, "ar", "الم").is_ok());
    }

    #[test]
    fn test_grouping_skips_empty_surahs() {
        let engine = SearchEngine::new();
        let results = engine.search(&translated_document(), "en", "allah").unwrap();

        let ids: Vec<u32> = results.results.iter().map(|g| g.surah.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(results.results[0].verses.len(), 2);
        assert_eq!(results.results[1].verses.len(), 1);
        assert_eq!(results.total, 3);

        let verse_ids: Vec<u32> = results.results[0].verses.iter().map(|v| v.id).collect();
        assert_eq!(verse_ids, vec![255, 256]);
    }

    #[test]
    fn test_ayat_al_kursi_is_found() {
        let engine = SearchEngine::new();
        let results = engine.search(&translated_document(), "en", "Allah").unwrap();

        let baqarah = results.results.iter().find(|g| g.surah.id == 2).unwrap();
        assert_eq!(baqarah.surah.transliteration, "Al-Baqarah");
        assert!(baqarah.verses.iter().any(|v| v.id == 255));
    }

    #[test]
    fn test_source_text_is_case_sensitive_and_ignores_translation() {
        let engine = SearchEngine::new();
        let doc = Document {
            surahs: vec![surah(1, "Test", vec![
                verse(1, "Alpha text", Some("beta gloss"), None),
                verse(2, "alpha text", Some("Alpha gloss"), None),
            ])],
        };

        let results = engine.search(&doc, "ar", "Alpha").unwrap();
        assert_eq!(results.total, 1);
        assert_eq!(results.results[0].verses[0].id, 1);

        assert!(engine.search(&doc, "ar", "gloss").unwrap().is_empty());
    }

    #[test]
    fn test_transliteration_policy() {
        let engine = SearchEngine::new();
        let doc = Document {
            surahs: vec![surah(1, "Al-Fatihah", vec![
                verse(1, "بِسْمِ ٱللَّهِ", Some("In the name"), Some("Bismi Allahi")),
                verse(2, "ٱلْحَمْدُ", Some("Bismi in translation"), Some("Alhamdu lillahi")),
            ])],
        };

        let results = engine.search(&doc, "transliteration", "BISMI").unwrap();
        assert_eq!(results.total, 1);
        assert_eq!(results.results[0].verses[0].id, 1);

        let results = engine.search(&doc, "transliteration", "ٱلْحَمْدُ").unwrap();
        assert_eq!(results.results[0].verses[0].id, 2);
    }

    #[test]
    fn test_translation_policy_matches_text_case_sensitively() {
        let engine = SearchEngine::new();
        let doc = Document {
            surahs: vec![surah(1, "Test", vec![
                verse(1, "Qaf sign", None, None),
                verse(2, "qaf sign", Some("no match here"), None),
            ])],
        };

        let results = engine.search(&doc, "fr", "Qaf").unwrap();
        assert_eq!(results.total, 1);
        assert_eq!(results.results[0].verses[0].id, 1);
    }
}
