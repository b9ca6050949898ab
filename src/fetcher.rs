use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::UpstreamConfig;

const QUERY_TOPIC: &str = "India";
const LANGUAGE: &str = "en";
const SORT_BY: &str = "publishedAt";
const PAGE_SIZE: u32 = 100;
const LOG_BODY_CHARS: usize = 300;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("upstream API key is not configured")]
    Config,
    /// Non-success status, or no response at all (`status` is `None` on
    /// connection failures and timeouts)
    #[error("upstream HTTP error {}: {body}", display_status(.status))]
    UpstreamHttp { status: Option<u16>, body: String },
    #[error("failed to decode upstream response: {0}")]
    UpstreamFormat(#[from] serde_json::Error),
    #[error("upstream returned status: {message}")]
    UpstreamStatus { message: String },
}

/// One entry of the upstream `articles` array, projected onto the fields
/// we keep. A field is `None` when absent, null or not a string.
#[derive(Debug, Clone, Default)]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl RawArticle {
    /// Entries that are not JSON objects project to all-`None`.
    pub fn from_value(entry: &Value) -> Self {
        let field = |name: &str| entry.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            title: field("title"),
            description: field("description"),
            url: field("url"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: Option<String>,
    message: Option<String>,
    // Entries stay untyped so one malformed row cannot fail the whole batch
    #[serde(default)]
    articles: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
}

pub struct Fetcher {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl Fetcher {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("NewsCategorizer/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Run the fixed search once and return the cleaned articles, newest first.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>, FetchError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FetchError::Config)?;

        let page_size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", QUERY_TOPIC),
                ("language", LANGUAGE),
                ("sortBy", SORT_BY),
                ("pageSize", page_size.as_str()),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        info!("Upstream HTTP status: {}", status.as_u16());
        info!("Upstream raw response: {}", truncate_chars(&body, LOG_BODY_CHARS));

        if !status.is_success() {
            return Err(FetchError::UpstreamHttp {
                status: Some(status.as_u16()),
                body,
            });
        }

        let articles = Self::parse_response(&body)?;
        if articles.is_empty() {
            warn!("No articles found");
            return Ok(Vec::new());
        }

        let total = articles.len();
        let cleaned = clean_articles(articles);
        debug!(
            "Kept {} of {} articles, dropped {} with missing fields",
            cleaned.len(),
            total,
            total - cleaned.len()
        );
        if cleaned.is_empty() {
            warn!("All {} articles were missing a title, description or url", total);
        }

        Ok(cleaned)
    }

    /// Decode the search payload and check its application-level status.
    pub fn parse_response(body: &str) -> Result<Vec<RawArticle>, FetchError> {
        let parsed: SearchResponse = serde_json::from_str(body)?;

        if parsed.status.as_deref() != Some("ok") {
            let message = parsed
                .message
                .or(parsed.status)
                .unwrap_or_else(|| "missing status".to_string());
            return Err(FetchError::UpstreamStatus { message });
        }

        Ok(parsed
            .articles
            .unwrap_or_default()
            .iter()
            .map(RawArticle::from_value)
            .collect())
    }
}

fn display_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "(no response)".to_string(),
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::UpstreamHttp {
        status: err.status().map(|s| s.as_u16()),
        body: err.to_string(),
    }
}

/// Drop entries missing a title, description or url. Order is preserved.
pub fn clean_articles(raw: Vec<RawArticle>) -> Vec<Article> {
    raw.into_iter()
        .filter_map(|entry| {
            let title = non_empty(entry.title)?;
            let description = non_empty(entry.description)?;
            let url = non_empty(entry.url)?;
            Some(Article {
                title,
                description,
                url,
            })
        })
        .collect()
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
