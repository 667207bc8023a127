//! Corpus data model
//!
//! Documents are decoded strictly from JSON and checked once at load time.
//! After that they are immutable and shared behind `Arc`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of surahs in a complete corpus.
pub const SURAH_COUNT: u32 = 114;

/// A single numbered verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub id: u32,
    /// Source-language text, present in every corpus file
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
}

/// A numbered chapter with its verses in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub id: u32,
    pub name: String,
    pub transliteration: String,
    /// Missing from the source-language file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub total_verses: u32,
    pub verses: Vec<Verse>,
}

/// Surah identity without verses or metadata, used in search and verse responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurahSummary {
    pub id: u32,
    pub name: String,
    pub transliteration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

/// Surah listing entry: everything except the verses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurahInfo {
    pub id: u32,
    pub name: String,
    pub transliteration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub total_verses: u32,
}

impl Surah {
    pub fn summary(&self) -> SurahSummary {
        SurahSummary {
            id: self.id,
            name: self.name.clone(),
            transliteration: self.transliteration.clone(),
            translation: self.translation.clone(),
        }
    }

    pub fn info(&self) -> SurahInfo {
        SurahInfo {
            id: self.id,
            name: self.name.clone(),
            transliteration: self.transliteration.clone(),
            translation: self.translation.clone(),
            kind: self.kind.clone(),
            total_verses: self.total_verses,
        }
    }

    /// Find a verse by id. Ids below 1 are rejected before the lookup.
    pub fn verse(&self, verse_id: u64) -> Result<&Verse> {
        if verse_id < 1 {
            return Err(invalid_verse_id());
        }
        self.verses
            .iter()
            .find(|v| u64::from(v.id) == verse_id)
            .ok_or(Error::VerseNotFound {
                surah: self.id,
                verse: verse_id,
            })
    }
}

/// A whole corpus for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub surahs: Vec<Surah>,
}

impl Document {
    /// Decode a corpus file.
    ///
    /// Accepts the canonical `{ "surahs": [...] }` layout as well as a bare
    /// top-level array of surahs.
    pub fn from_json(bytes: &[u8]) -> std::result::Result<Self, String> {
        let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
        let decoded = if first == Some(&b'[') {
            serde_json::from_slice::<Vec<Surah>>(bytes).map(|surahs| Document { surahs })
        } else {
            serde_json::from_slice::<Document>(bytes)
        };
        let document = decoded.map_err(|e| e.to_string())?;

        document.check_shape()?;
        Ok(document)
    }

    /// Surah ids must be unique and within range; verse ids must be positive
    /// and strictly ascending within their surah.
    fn check_shape(&self) -> std::result::Result<(), String> {
        let mut seen = [false; SURAH_COUNT as usize + 1];
        for surah in &self.surahs {
            if surah.id < 1 || surah.id > SURAH_COUNT {
                return Err(format!("surah id {} is outside 1..={}", surah.id, SURAH_COUNT));
            }
            if std::mem::replace(&mut seen[surah.id as usize], true) {
                return Err(format!("duplicate surah id {}", surah.id));
            }

            let mut previous = 0;
            for verse in &surah.verses {
                if verse.id <= previous {
                    return Err(format!(
                        "surah {}: verse id {} is not positive and ascending",
                        surah.id, verse.id
                    ));
                }
                previous = verse.id;
            }
        }
        Ok(())
    }

    /// Find a surah by id. Ids outside `1..=114` are rejected before the lookup.
    pub fn surah(&self, surah_id: u32) -> Result<&Surah> {
        if surah_id < 1 || surah_id > SURAH_COUNT {
            return Err(invalid_surah_id());
        }
        self.surahs
            .iter()
            .find(|s| s.id == surah_id)
            .ok_or(Error::SurahNotFound(surah_id))
    }

    /// Find a verse within a surah.
    pub fn verse(&self, surah_id: u32, verse_id: u64) -> Result<(&Surah, &Verse)> {
        let surah = self.surah(surah_id)?;
        let verse = surah.verse(verse_id)?;
        Ok((surah, verse))
    }

    pub fn surah_infos(&self) -> Vec<SurahInfo> {
        self.surahs.iter().map(Surah::info).collect()
    }

    pub fn verse_count(&self) -> usize {
        self.surahs.iter().map(|s| s.verses.len()).sum()
    }
}

fn invalid_surah_id() -> Error {
    Error::InvalidQuery(format!(
        "Invalid surah ID. Must be between 1 and {}.",
        SURAH_COUNT
    ))
}

fn invalid_verse_id() -> Error {
    Error::InvalidQuery("Invalid verse ID. Must be a positive number.".to_string())
}

/// Parse a surah id from a request path segment.
pub fn parse_surah_id(raw: &str) -> Result<u32> {
    match raw.trim().parse::<i64>() {
        Ok(id) if (1..=SURAH_COUNT as i64).contains(&id) => Ok(id as u32),
        _ => Err(invalid_surah_id()),
    }
}

/// Parse a verse id from a request path segment.
///
/// Any positive number is accepted, however large; ids that no verse can
/// carry fall through to a not-found lookup rather than a bad request.
pub fn parse_verse_id(raw: &str) -> Result<u64> {
    let digits = raw.trim();
    match digits.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id as u64),
        Ok(_) => Err(invalid_verse_id()),
        // Too many digits for an integer, but still a positive number.
        Err(_) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => Ok(u64::MAX),
        Err(_) => Err(invalid_verse_id()),
    }
}
