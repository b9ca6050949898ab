use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::classifier::{classify, Category};
use crate::fetcher::{Article, FetchError, Fetcher};

pub struct AppState {
    pub fetcher: Fetcher,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: Category,
}

impl From<Article> for CategorizedArticle {
    fn from(article: Article) -> Self {
        let category = classify(&article.title, &article.description);
        Self {
            title: article.title,
            description: article.description,
            url: article.url,
            category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsResponse {
    pub news: Vec<CategorizedArticle>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

// Every fetch failure ends the request here as a 500 with the error envelope
pub struct ApiError(FetchError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Server error: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Internal Server Error".to_string(),
                details: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError(err)
    }
}

pub async fn news(State(state): State<Arc<AppState>>) -> Result<Json<NewsResponse>, ApiError> {
    let articles = state.fetcher.fetch_articles().await?;

    let news: Vec<CategorizedArticle> = articles.into_iter().map(CategorizedArticle::from).collect();
    info!("Serving {} categorized articles", news.len());

    Ok(Json(NewsResponse { news }))
}

pub async fn health() -> &'static str {
    "OK"
}

/// Permissive CORS. Credentials rule out `*`, so origin, methods and
/// headers are mirrored from the request instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/news", get(news))
        .route("/health", get(health))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
