use std::env;

use anyhow::Result;

use crate::generate::openai::{DEFAULT_MODEL, DEFAULT_OPENAI_URL};
use crate::search::serpapi::DEFAULT_SERPAPI_URL;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    pub serpapi_api_key: String,
    pub openai_api_key: String,
    /// SerpAPI endpoint (defaults to https://serpapi.com); override for tests.
    pub serpapi_url: String,
    /// OpenAI endpoint (defaults to https://api.openai.com); override for tests.
    pub openai_url: String,
    /// Chat model used for outline generation.
    pub openai_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Keys are allowed to be missing here. The `require_*` guards run
    /// before the first call that actually needs them, so `osnova intent`
    /// works on a machine with no keys at all.
    pub fn load() -> Result<Self> {
        Ok(Self {
            serpapi_api_key: env::var("SERPAPI_API_KEY").unwrap_or_default(),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            serpapi_url: env::var("OSNOVA_SERPAPI_URL")
                .unwrap_or_else(|_| DEFAULT_SERPAPI_URL.to_string()),
            openai_url: env::var("OSNOVA_OPENAI_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_URL.to_string()),
            openai_model: env::var("OSNOVA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }

    /// Check that the SerpAPI key is configured.
    /// Call this before any operation that searches.
    pub fn require_serpapi(&self) -> Result<()> {
        if self.serpapi_api_key.is_empty() {
            anyhow::bail!(
                "SERPAPI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Check that the OpenAI key is configured.
    /// Call this before any operation that generates an outline.
    pub fn require_openai(&self) -> Result<()> {
        if self.openai_api_key.is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
