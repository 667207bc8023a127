//! Corpus loader - reads and decodes one language's file from disk

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use async_trait::async_trait;
use crate::{Error, Result};
use crate::language::{SOURCE_LANGUAGE, TRANSLITERATION};
use super::model::Document;

/// A decoded document together with the modification time of its source file.
#[derive(Debug)]
pub struct LoadedCorpus {
    pub document: Document,
    pub modified_at: SystemTime,
}

/// Where corpus documents come from.
///
/// The cache only ever talks to this trait, so tests can count how often
/// content is actually read.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Whether a corpus file exists for the language.
    async fn has_corpus(&self, language: &str) -> bool;

    /// Modification time of the language's file, without reading its content.
    async fn modified_at(&self, language: &str) -> Result<SystemTime>;

    /// Read and decode the language's file.
    async fn load(&self, language: &str) -> Result<LoadedCorpus>;
}

/// File name of the corpus for a language code.
pub fn corpus_file_name(language: &str) -> String {
    match language {
        TRANSLITERATION => "quran_transliteration.json".to_string(),
        SOURCE_LANGUAGE => "quran.json".to_string(),
        code => format!("quran_{}.json", code),
    }
}

/// Loads corpus files from a single directory.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    dir: PathBuf,
}

impl CorpusLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the corpus file for a language code.
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(corpus_file_name(language))
    }
}

#[async_trait]
impl CorpusSource for CorpusLoader {
    async fn has_corpus(&self, language: &str) -> bool {
        let path = self.path_for(language);
        match tokio::fs::metadata(&path).await {
            Ok(meta) => meta.is_file(),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!("Cannot stat {}: {}", path.display(), e);
                }
                false
            }
        }
    }

    async fn modified_at(&self, language: &str) -> Result<SystemTime> {
        let path = self.path_for(language);
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| Error::from_io(language, path.clone(), e))?;
        metadata.modified().map_err(|e| Error::from_io(language, path, e))
    }

    async fn load(&self, language: &str) -> Result<LoadedCorpus> {
        let path = self.path_for(language);

        // The stat and the read are not one snapshot; a write landing between
        // them is picked up by the next timestamp check.
        let modified_at = self.modified_at(language).await?;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::from_io(language, path.clone(), e))?;

        let document = Document::from_json(&bytes)
            .map_err(|reason| Error::MalformedData { path: path.clone(), reason })?;

        tracing::debug!(
            "Decoded {} ({} surahs, {} verses)",
            path.display(),
            document.surahs.len(),
            document.verse_count()
        );

        Ok(LoadedCorpus { document, modified_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use tempfile::TempDir;

    const CORPUS: &str = r#"{"surahs": [{"id": 1, "name": "الفاتحة", "transliteration": "Al-Fatihah",
        "translation": "The Opener", "type": "meccan", "total_verses": 1,
        "verses": [{"id": 1, "text": "بِسْمِ ٱللَّهِ", "translation": "In the name of Allah"}]}]}"#;

    #[test]
    fn test_corpus_file_names() {
        assert_eq!(corpus_file_name("ar"), "quran.json");
        assert_eq!(corpus_file_name("transliteration"), "quran_transliteration.json");
        assert_eq!(corpus_file_name("bn"), "quran_bn.json");
    }

    #[tokio::test]
    async fn test_directory_is_not_a_corpus() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("quran_fr.json")).unwrap();
        let loader = CorpusLoader::new(dir.path());

        assert!(!loader.has_corpus("fr").await);
        assert!(!loader.has_corpus("es").await);
    }

    #[tokio::test]
    async fn test_load_reads_document_and_timestamp() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("quran_en.json"), CORPUS).unwrap();
        let loader = CorpusLoader::new(dir.path());

        assert!(loader.has_corpus("en").await);
        assert!(!loader.has_corpus("fr").await);

        let loaded = loader.load("en").await.unwrap();
        assert_eq!(loaded.document.surahs[0].transliteration, "Al-Fatihah");
        assert_eq!(loaded.modified_at, loader.modified_at("en").await.unwrap());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let loader = CorpusLoader::new(dir.path());

        let err = loader.load("sv").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(matches!(err, Error::CorpusNotFound { ref language, .. } if language == "sv"));
        assert_eq!(loader.modified_at("sv").await.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("quran.json"), "{\"surahs\": [{\"id\": 1}]}").unwrap();
        let loader = CorpusLoader::new(dir.path());

        let err = loader.load("ar").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData);
        assert!(err.to_string().contains("quran.json"));
    }
}
