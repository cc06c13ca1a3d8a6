//! News provider client.
//!
//! Wraps the two upstream endpoints the gateway relays: category
//! headlines and free-text search.

use crate::config::NewsConfig;
use crate::models::NewsApiResponse;
use anyhow::Result;
use reqwest::Client;

/// Articles requested per page, fixed for every call.
const PAGE_SIZE: u32 = 20;

/// Client for the news provider's REST API.
#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    config: NewsConfig,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch US top headlines for a category.
    pub async fn top_headlines(&self, category: &str) -> Result<NewsApiResponse> {
        let url = format!("{}/top-headlines", self.config.api_base_url);
        self.fetch(&url, &[("country", "us"), ("category", category)])
            .await
    }

    /// Search all articles matching a query, newest first, English only.
    pub async fn search_everything(&self, query: &str) -> Result<NewsApiResponse> {
        let url = format!("{}/everything", self.config.api_base_url);
        self.fetch(
            &url,
            &[("q", query), ("language", "en"), ("sortBy", "publishedAt")],
        )
        .await
    }

    async fn fetch(&self, url: &str, params: &[(&str, &str)]) -> Result<NewsApiResponse> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("pageSize", PAGE_SIZE)])
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, body = %body, "news provider response");

        // The provider signals failure through the body's status flag,
        // not the HTTP status, so the body is parsed either way.
        let payload: NewsApiResponse = serde_json::from_str(&body)?;
        Ok(payload)
    }
}
