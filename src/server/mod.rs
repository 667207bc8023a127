use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::cache::CacheStore;
use crate::corpus::{CorpusLoader, CorpusSource};
use crate::resolver::LanguageResolver;
use crate::search::SearchEngine;

pub mod routes;

/// Server state shared by every request handler
pub struct AppState {
    pub resolver: LanguageResolver,
    pub cache: CacheStore,
    pub search: SearchEngine,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(source: Arc<dyn CorpusSource>) -> Self {
        Self {
            resolver: LanguageResolver::new(Arc::clone(&source)),
            cache: CacheStore::new(source),
            search: SearchEngine::new(),
            started_at: Instant::now(),
        }
    }

    /// State over corpus files in `data_dir`.
    pub fn from_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(CorpusLoader::new(data_dir)))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(routes::health))
        .route("/languages", get(routes::get_languages))
        .route("/quran", get(routes::get_quran))
        .route("/quran/search", get(routes::search))
        .route("/quran/{id}", get(routes::get_surah))
        .route("/quran/{id}/{verse}", get(routes::get_verse));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(host: &str, port: u16, data_dir: PathBuf) -> anyhow::Result<()> {
    if !data_dir.is_dir() {
        tracing::warn!("Corpus directory {} does not exist", data_dir.display());
    }

    let state = Arc::new(AppState::from_dir(data_dir.clone()));
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Serving corpus from {} on {}", data_dir.display(), addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
