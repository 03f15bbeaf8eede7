// SerpAPI implementation of the search provider.
//
// One GET against /search.json with the google engine. The response is a
// large loosely-shaped document; only `organic_results` is decoded, every
// field optional with a defined fallback. The conversion to SearchHit
// happens here, and nothing downstream re-validates provider fields.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::traits::{SearchHit, SearchProvider};

/// Default SerpAPI endpoint; overridable for tests.
pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com";

/// SerpAPI client for Google organic results.
pub struct SerpApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SerpApiClient {
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("osnova/0.1 (outline-generator)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchHit>> {
        let url = format!("{}/search.json", self.base_url);
        let count_str = count.to_string();

        debug!(query = query, count = count, "SerpAPI search");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("num", &count_str),
                ("hl", "cs"),
                ("api_key", &self.api_key),
            ])
            .send()
            .await
            .context("SerpAPI request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("SerpAPI returned {status}: {body}");
        }

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to deserialize SerpAPI response")?;

        let hits: Vec<SearchHit> = body
            .organic_results
            .into_iter()
            .take(count)
            .filter_map(|result| {
                let url = result.link?;
                let title = result.title.unwrap_or_else(|| url.clone());
                Some(SearchHit { url, title })
            })
            .collect();

        debug!(hits = hits.len(), "SerpAPI results decoded");
        Ok(hits)
    }
}

// -- Serde types for the SerpAPI response --

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Deserialize)]
struct OrganicResult {
    link: Option<String>,
    title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_organic_results_decodes_to_empty() {
        let body: SearchResponse = serde_json::from_str(r#"{"search_metadata": {}}"#).unwrap();
        assert!(body.organic_results.is_empty());
    }

    #[test]
    fn test_partial_result_fields() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"organic_results": [
                {"link": "https://example.cz/pracky", "position": 1},
                {"title": "no link here"},
                {"link": "https://example.cz/susicky", "title": "Sušičky"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.organic_results.len(), 3);
        assert!(body.organic_results[1].link.is_none());
        assert_eq!(body.organic_results[2].title.as_deref(), Some("Sušičky"));
    }
}
