//! # Quran API - read-only corpus server
//!
//! Serves a multi-language Quran corpus from static JSON files on disk.
//!
//! The crate provides:
//! - Corpus loading with strict schema decoding
//! - Language resolution with a deterministic fallback chain
//! - A per-language document cache invalidated by file modification time
//! - Substring search over verses, grouped by surah
//! - An axum HTTP server and a CLI over the same components

pub mod language;
pub mod corpus;
pub mod resolver;
pub mod cache;
pub mod search;
pub mod audio;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use language::{Language, TextDirection};
pub use corpus::{CorpusLoader, CorpusSource, Document, Surah, SurahSummary, Verse};
pub use resolver::LanguageResolver;
pub use cache::CacheStore;
pub use search::{SearchEngine, SearchResults};

use std::path::PathBuf;

/// Result type alias for corpus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse error classification used at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    MalformedData,
    Io,
    InvalidQuery,
}

/// Error types for corpus operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Corpus file for language '{language}' not found at {}", path.display())]
    CorpusNotFound { language: String, path: PathBuf },

    #[error("Surah not found")]
    SurahNotFound(u32),

    #[error("Verse not found")]
    VerseNotFound { surah: u32, verse: u64 },

    #[error("Malformed corpus file {}: {reason}", path.display())]
    MalformedData { path: PathBuf, reason: String },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    InvalidQuery(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::CorpusNotFound { .. } | Error::SurahNotFound(_) | Error::VerseNotFound { .. } => {
                ErrorKind::NotFound
            }
            Error::MalformedData { .. } => ErrorKind::MalformedData,
            Error::Io { .. } => ErrorKind::Io,
            Error::InvalidQuery(_) => ErrorKind::InvalidQuery,
        }
    }

    /// Classify an IO failure on a corpus file.
    pub(crate) fn from_io(language: &str, path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::CorpusNotFound {
                language: language.to_string(),
                path,
            }
        } else {
            Error::Io { path, source }
        }
    }
}
