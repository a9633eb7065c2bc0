//! HTTP serving layer: routing, keyword validation, response envelopes.
//!
//! Boundary plumbing around [`ProductSearchService`]; the scraping core
//! knows nothing about HTTP serving, status codes, or CORS.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::application::search_service::ProductSearchService;
use crate::domain::product::ProductRecord;

/// Keyword length bounds enforced at the API boundary; the original search
/// client refuses to submit anything outside them.
const MIN_KEYWORD_LEN: usize = 2;
const MAX_KEYWORD_LEN: usize = 100;

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub keyword: String,
    #[serde(rename = "totalProducts")]
    pub total_products: usize,
    pub timestamp: String,
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message,
            timestamp: timestamp(),
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

#[derive(Debug, Deserialize)]
struct ScrapeParams {
    keyword: Option<String>,
}

/// Build the API router around a shared search service.
pub fn router(service: Arc<ProductSearchService>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/scrape", get(scrape))
        .route("/api/health", get(health))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// `GET /api/scrape?keyword=<search term>`
async fn scrape(
    State(service): State<Arc<ProductSearchService>>,
    Query(params): Query<ScrapeParams>,
) -> Response {
    let keyword = params.keyword.as_deref().map(str::trim).unwrap_or_default();
    if keyword.is_empty() {
        return bad_request("the \"keyword\" query parameter is required");
    }
    let len = keyword.chars().count();
    if !(MIN_KEYWORD_LEN..=MAX_KEYWORD_LEN).contains(&len) {
        return bad_request(format!(
            "keyword must be between {MIN_KEYWORD_LEN} and {MAX_KEYWORD_LEN} characters"
        ));
    }

    match service.search(keyword).await {
        Ok(products) => (
            StatusCode::OK,
            Json(ScrapeResponse {
                success: true,
                keyword: keyword.to_string(),
                total_products: products.len(),
                timestamp: timestamp(),
                products,
            }),
        )
            .into_response(),
        Err(err) => {
            error!(keyword, %err, "scrape request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "internal server error",
                    Some(err.to_string()),
                )),
            )
                .into_response()
        }
    }
}

/// `GET /api/health`
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "server is running",
        "timestamp": timestamp(),
    }))
}

/// `GET /` - API index.
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "shopscan product search API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "scrape": "GET /api/scrape?keyword=<search term>",
            "health": "GET /api/health",
        },
    }))
}

async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            "endpoint not found",
            Some(format!("no route for {uri}")),
        )),
    )
        .into_response()
}

fn bad_request(error: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(error, None)),
    )
        .into_response()
}
