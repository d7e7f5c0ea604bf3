use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use corpus_analysis::Analyzer;
use corpus_index::{Corpus, WordTree, search};
use corpus_types::PartOfSpeech;

/// Everything a query needs, built once at startup and immutable after.
pub struct SearchState {
    pub corpus: Corpus,
    pub tree: WordTree,
    pub analyzer: Analyzer,
}

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchState>,
    pub max_page_size: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/words/{word}", get(word))
        .route("/v1/phrase", get(phrase))
        .route("/v1/tree", get(tree))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

#[derive(Deserialize)]
pub struct WordQuery {
    pub pos: Option<String>,
}

#[derive(Serialize)]
pub struct WordResponse {
    word: String,
    stem: String,
    occurrences: u64,
    articles: Vec<ArticleGroup>,
}

#[derive(Serialize)]
struct ArticleGroup {
    title: String,
    authors: Vec<String>,
    forms: Vec<FormGroup>,
}

#[derive(Serialize)]
struct FormGroup {
    form: String,
    sentences: Vec<String>,
}

async fn word(
    State(state): State<AppState>,
    Path(surface): Path<String>,
    Query(params): Query<WordQuery>,
) -> Result<Json<WordResponse>, ApiError> {
    let pos = params.pos.as_deref().map(parse_pos).transpose()?;
    let search_state = &state.search;

    let found = search::word(
        &search_state.corpus,
        &search_state.tree,
        &search_state.analyzer,
        &surface,
    )
    .ok_or_else(|| ApiError::not_found(format!("word not found: {surface}")))?;

    let groups = match pos {
        Some(pos) => search_state
            .corpus
            .occurrences_with_pos(found, pos, search_state.analyzer.morphology()),
        None => search_state.corpus.occurrences(found),
    };

    let articles = groups
        .into_iter()
        .map(|group| {
            let article = search_state.corpus.article(group.article);
            ArticleGroup {
                title: article.title().to_string(),
                authors: article.authors().to_vec(),
                forms: group
                    .forms
                    .into_iter()
                    .map(|(form, sentences)| FormGroup {
                        form: form.to_string(),
                        sentences: sentences
                            .into_iter()
                            .map(|id| search_state.corpus.sentence(id).text().to_string())
                            .collect(),
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(Json(WordResponse {
        word: surface,
        stem: found.stem().to_string(),
        occurrences: found.occurrences(),
        articles,
    }))
}

#[derive(Deserialize)]
pub struct PhraseQuery {
    pub q: String,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Serialize)]
pub struct PhraseResponse {
    query: String,
    page: usize,
    page_size: usize,
    total: usize,
    has_more: bool,
    items: Vec<PhraseHit>,
}

#[derive(Serialize)]
struct PhraseHit {
    text: String,
    article: String,
}

async fn phrase(
    State(state): State<AppState>,
    Query(params): Query<PhraseQuery>,
) -> Result<Json<PhraseResponse>, ApiError> {
    let tokens: Vec<&str> = params.q.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ApiError::bad_request("q is required"));
    }
    let (page, page_size) = paging(params.page, params.page_size, state.max_page_size)?;

    let search_state = &state.search;
    let hits = search::phrase(
        &search_state.corpus,
        &search_state.tree,
        &search_state.analyzer,
        &tokens,
    );

    let total = hits.len();
    let offset = (page - 1).saturating_mul(page_size);
    let items: Vec<PhraseHit> = hits
        .iter()
        .skip(offset)
        .take(page_size)
        .map(|&id| {
            let sentence = search_state.corpus.sentence(id);
            PhraseHit {
                text: sentence.text().to_string(),
                article: search_state
                    .corpus
                    .article(sentence.article())
                    .title()
                    .to_string(),
            }
        })
        .collect();
    let has_more = offset + items.len() < total;

    Ok(Json(PhraseResponse {
        query: params.q,
        page,
        page_size,
        total,
        has_more,
        items,
    }))
}

#[derive(Deserialize)]
pub struct TreeQuery {
    pub prefix: Option<String>,
}

#[derive(Serialize)]
pub struct TreeResponse {
    prefix: String,
    children: Vec<char>,
    /// Stem terminating at this node, if the prefix spells a whole stem.
    stem: Option<String>,
}

async fn tree(
    State(state): State<AppState>,
    Query(params): Query<TreeQuery>,
) -> Result<Json<TreeResponse>, ApiError> {
    let prefix = params.prefix.unwrap_or_default();
    let search_state = &state.search;

    let mut cursor = search_state.tree.cursor();
    for ch in prefix.chars() {
        cursor
            .descend(ch)
            .map_err(|_| ApiError::not_found(format!("no node for prefix: {prefix}")))?;
    }

    let stem = cursor
        .word()
        .and_then(|id| search_state.corpus.registry().get(id))
        .map(|word| word.stem().to_string());

    Ok(Json(TreeResponse {
        prefix,
        children: cursor.children().collect(),
        stem,
    }))
}

fn parse_pos(raw: &str) -> Result<PartOfSpeech, ApiError> {
    let pos = PartOfSpeech::from_tag(raw);
    if pos == PartOfSpeech::Unknown && !raw.eq_ignore_ascii_case("unknown") {
        return Err(ApiError::bad_request(format!(
            "unknown part of speech tag: {raw}"
        )));
    }
    Ok(pos)
}

fn paging(
    page: Option<usize>,
    page_size: Option<usize>,
    max_page_size: usize,
) -> Result<(usize, usize), ApiError> {
    let page = page.unwrap_or(1);
    if page == 0 {
        return Err(ApiError::bad_request("page must be >= 1"));
    }
    let mut page_size = page_size.unwrap_or(50);
    if page_size == 0 {
        return Err(ApiError::bad_request("page_size must be >= 1"));
    }
    if page_size > max_page_size {
        page_size = max_page_size;
    }
    Ok((page, page_size))
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }

    fn not_found<T: Into<String>>(msg: T) -> Self {
        ApiError::NotFound(msg.into())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
