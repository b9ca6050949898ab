//! News Categorizer - keyword-labelled India headlines over HTTP
//!
//! Fetches recent articles from a news-search API, drops incomplete
//! entries, assigns each one a topical category and serves the result
//! from `GET /news`.

pub mod classifier;
pub mod config;
pub mod fetcher;
pub mod routes;
