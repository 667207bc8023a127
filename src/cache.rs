//! Per-language document cache, invalidated by file modification time
//!
//! Every `get` stats the corpus file first. A cached document is served only
//! while its recorded modification time equals the one on disk; any
//! difference (or no entry at all) reloads and replaces the whole entry.
//! Entries are never evicted; the language table bounds their number.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::{Mutex, RwLock};
use crate::Result;
use crate::corpus::{CorpusSource, Document};

/// A cached document and the modification time of the file it came from.
#[derive(Debug)]
struct CacheEntry {
    document: Arc<Document>,
    source_modified_at: SystemTime,
}

pub struct CacheStore {
    source: Arc<dyn CorpusSource>,
    entries: RwLock<HashMap<String, Arc<CacheEntry>>>,
    /// One lock per language so concurrent misses load the file only once
    load_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl CacheStore {
    /// Create an empty cache over a corpus source.
    pub fn new(source: Arc<dyn CorpusSource>) -> Self {
        Self {
            source,
            entries: RwLock::new(HashMap::new()),
            load_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Get the document for a language, reloading it if the file changed.
    ///
    /// Fails with the loader's error when the file is missing or unreadable;
    /// a previously cached document is never served in that case.
    pub async fn get(&self, language: &str) -> Result<Arc<Document>> {
        let on_disk = self.source.modified_at(language).await?;

        if let Some(document) = self.fresh_entry(language, on_disk).await {
            tracing::debug!("Cache hit for '{}'", language);
            return Ok(document);
        }

        let load_lock = self.load_lock(language).await;
        let _guard = load_lock.lock().await;

        // Another request may have reloaded while we waited.
        if let Some(document) = self.fresh_entry(language, on_disk).await {
            tracing::debug!("Cache filled concurrently for '{}'", language);
            return Ok(document);
        }

        let loaded = self.source.load(language).await.inspect_err(|e| {
            tracing::warn!("Failed to load corpus for '{}': {}", language, e);
        })?;

        let entry = Arc::new(CacheEntry {
            document: Arc::new(loaded.document),
            source_modified_at: loaded.modified_at,
        });
        let document = Arc::clone(&entry.document);

        let previous = self.entries.write().await.insert(language.to_string(), entry);
        if previous.is_some() {
            tracing::info!("Reloaded corpus for '{}' after modification", language);
        } else {
            tracing::info!("Loaded corpus for '{}'", language);
        }

        Ok(document)
    }

    /// The modification time recorded for a language's cached document.
    pub async fn source_modified_at(&self, language: &str) -> Option<SystemTime> {
        self.entries
            .read()
            .await
            .get(language)
            .map(|entry| entry.source_modified_at)
    }

    /// Languages that currently have a cached document, sorted.
    pub async fn cached_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.entries.read().await.keys().cloned().collect();
        languages.sort();
        languages
    }

    async fn fresh_entry(&self, language: &str, on_disk: SystemTime) -> Option<Arc<Document>> {
        let entries = self.entries.read().await;
        entries
            .get(language)
            .filter(|entry| entry.source_modified_at == on_disk)
            .map(|entry| Arc::clone(&entry.document))
    }

    async fn load_lock(&self, language: &str) -> Arc<Mutex<()>> {
        let mut locks = self.load_locks.lock().await;
        Arc::clone(locks.entry(language.to_string()).or_default())
    }
}
