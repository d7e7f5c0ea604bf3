use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use concordance::{AppState, SearchState, router};
use corpus_analysis::{AnalyzerConfig, Language};
use corpus_index::{Corpus, WordTree};

fn make_state() -> AppState {
    let analyzer = AnalyzerConfig::new(Language::English).build().unwrap();
    let mut corpus = Corpus::new();
    corpus.add_article(
        vec!["J. W. Doe".into()],
        "ON CATS AND WINDOWS",
        "The cat sits on the window. The cat was sitting quietly. The cat sleeps.",
        &analyzer,
    );
    corpus.add_article(
        vec!["A. B. Roe".into()],
        "ON DOGS",
        "A dog sits near the door.",
        &analyzer,
    );
    let tree = WordTree::build(corpus.registry());
    AppState {
        search: Arc::new(SearchState {
            corpus,
            tree,
            analyzer,
        }),
        max_page_size: 500,
    }
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(make_state());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn healthz_ok() {
    let app = router(make_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn word_endpoint_groups_forms_by_article() {
    let (status, body) = get("/v1/words/sits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stem"], "sit");

    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0]["title"], "ON CATS AND WINDOWS");

    let forms: Vec<&str> = articles[0]["forms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["form"].as_str().unwrap())
        .collect();
    assert_eq!(forms, vec!["sits", "sitting"]);
}

#[tokio::test]
async fn word_endpoint_resolves_any_inflection() {
    let (status, body) = get("/v1/words/sleeping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stem"], "sleep");
}

#[tokio::test]
async fn word_endpoint_404_for_unknown_word() {
    let (status, body) = get("/v1/words/zeppelin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn word_endpoint_filters_by_pos() {
    let (status, body) = get("/v1/words/sits?pos=verb").await;
    assert_eq!(status, StatusCode::OK);
    let forms: Vec<&str> = body["articles"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|a| a["forms"].as_array().unwrap().iter())
        .map(|f| f["form"].as_str().unwrap())
        .collect();
    // Only "sitting" matches the verb suffix rules; "sits" is unclassified.
    assert_eq!(forms, vec!["sitting"]);
}

#[tokio::test]
async fn word_endpoint_rejects_unknown_pos_tag() {
    let (status, body) = get("/v1/words/sits?pos=gerundive").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("part of speech"));
}

#[tokio::test]
async fn phrase_endpoint_respects_word_order() {
    let (status, body) = get("/v1/phrase?q=cat%20sits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["article"], "ON CATS AND WINDOWS");

    let (status, body) = get("/v1/phrase?q=sits%20cat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn phrase_endpoint_matches_inflected_queries() {
    // Query inflections differ from the indexed surface forms.
    let (status, body) = get("/v1/phrase?q=cats%20sitting").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn phrase_endpoint_rejects_empty_query() {
    let (status, body) = get("/v1/phrase?q=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn phrase_endpoint_rejects_invalid_paging() {
    let (status, _) = get("/v1/phrase?q=cat&page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get("/v1/phrase?q=cat&page_size=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tree_endpoint_walks_by_prefix() {
    let (status, body) = get("/v1/tree?prefix=si").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["children"], serde_json::json!(["t"]));
    assert_eq!(body["stem"], serde_json::Value::Null);

    let (status, body) = get("/v1/tree?prefix=sit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stem"], "sit");
}

#[tokio::test]
async fn tree_endpoint_root_lists_first_letters() {
    let (status, body) = get("/v1/tree").await;
    assert_eq!(status, StatusCode::OK);
    let children: Vec<&str> = body["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert!(children.contains(&"c"));
    assert!(children.contains(&"s"));
}

#[tokio::test]
async fn tree_endpoint_404_for_unknown_prefix() {
    let (status, body) = get("/v1/tree?prefix=zz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("prefix"));
}
