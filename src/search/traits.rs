// Search provider trait — swap-ready abstraction.
//
// The pipeline only needs "query in, URLs out". Keeping that behind a
// trait means tests can feed canned results and a different SERP backend
// can slot in without touching the analysis code.

use anyhow::Result;
use async_trait::async_trait;

/// One organic search result, already reduced to the two fields the
/// pipeline uses. Results with no URL are dropped at the provider
/// boundary and never reach this type.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub url: String,
    /// Display title; falls back to the URL when the provider omits it.
    pub title: String,
}

/// Trait for retrieving organic search results for a query.
#[async_trait]
pub trait SearchProvider {
    /// Return up to `count` results, best-ranked first. An empty vec is a
    /// valid answer ("no results"), not an error.
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchHit>>;
}
