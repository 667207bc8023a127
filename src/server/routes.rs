use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use crate::audio::{self, AudioData};
use crate::corpus::{parse_surah_id, parse_verse_id, Surah, SurahInfo, SurahSummary, Verse};
use crate::language::Language;
use crate::search::SurahMatches;
use crate::server::AppState;
use crate::Error;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub lang: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An error on its way to the client, with its HTTP status decided.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        // A missing corpus file is a server fault; a missing surah or verse is the client's.
        let status = match &err {
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::SurahNotFound(_) | Error::VerseNotFound { .. } => StatusCode::NOT_FOUND,
            Error::CorpusNotFound { .. } | Error::MalformedData { .. } | Error::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!("{}", err);
        }
        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

type ApiResult = Result<Json<serde_json::Value>, ApiError>;

#[derive(Serialize)]
struct QuranResponse<'a> {
    language: &'a str,
    available_languages: &'a [Language],
    surahs: Vec<SurahInfo>,
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    language: &'a str,
    query: &'a str,
    results: Vec<SurahMatches>,
    total: usize,
}

#[derive(Serialize)]
struct SurahResponse<'a> {
    language: &'a str,
    audio: AudioData,
    #[serde(flatten)]
    surah: &'a Surah,
}

#[derive(Serialize)]
struct VerseResponse<'a> {
    language: &'a str,
    surah: SurahSummary,
    verse: &'a Verse,
    audio: AudioData,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}

pub async fn get_languages(State(state): State<Arc<AppState>>) -> Json<&'static [Language]> {
    Json(state.resolver.list_supported())
}

pub async fn get_quran(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LangParams>,
) -> ApiResult {
    let lang = state.resolver.resolve(params.lang.as_deref()).await;
    let document = state.cache.get(&lang).await?;

    Ok(Json(serde_json::to_value(QuranResponse {
        language: &lang,
        available_languages: state.resolver.list_supported(),
        surahs: document.surah_infos(),
    })?))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult {
    let lang = state.resolver.resolve(params.lang.as_deref()).await;
    let query = params.q.unwrap_or_default();

    // Reject short queries before touching the corpus.
    crate::search::validate_query(&query)?;

    let document = state.cache.get(&lang).await?;
    let found = state.search.search(&document, &lang, &query)?;

    Ok(Json(serde_json::to_value(SearchResponse {
        language: &lang,
        query: &query,
        results: found.results,
        total: found.total,
    })?))
}

pub async fn get_surah(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LangParams>,
) -> ApiResult {
    let lang = state.resolver.resolve(params.lang.as_deref()).await;
    let surah_id = parse_surah_id(&id)?;

    let document = state.cache.get(&lang).await?;
    let surah = document.surah(surah_id)?;

    Ok(Json(serde_json::to_value(SurahResponse {
        language: &lang,
        audio: audio::surah_audio(surah_id),
        surah,
    })?))
}

pub async fn get_verse(
    State(state): State<Arc<AppState>>,
    Path((id, verse)): Path<(String, String)>,
    Query(params): Query<LangParams>,
) -> ApiResult {
    let lang = state.resolver.resolve(params.lang.as_deref()).await;
    let surah_id = parse_surah_id(&id)?;
    let verse_id = parse_verse_id(&verse)?;

    let document = state.cache.get(&lang).await?;
    let (surah, verse) = document.verse(surah_id, verse_id)?;

    Ok(Json(serde_json::to_value(VerseResponse {
        language: &lang,
        surah: surah.summary(),
        verse,
        audio: audio::verse_audio(surah_id, verse.id),
    })?))
}
