//! Corpus Layer - on-disk JSON documents, one per language
//!
//! Each language has a single file under the corpus directory:
//! - `quran.json` for the source-language text (`ar`)
//! - `quran_transliteration.json` for the transliteration
//! - `quran_<code>.json` for every translation

pub mod model;
pub mod loader;

pub use model::{Document, Surah, SurahInfo, SurahSummary, Verse, SURAH_COUNT, parse_surah_id, parse_verse_id};
pub use loader::{CorpusLoader, CorpusSource, LoadedCorpus, corpus_file_name};
