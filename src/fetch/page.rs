// Competitor page fetcher — a thin reqwest wrapper that never fails.
//
// The analysis core must keep running when one competitor page is down,
// slow, or hostile, so every transport problem collapses to an empty
// string here. The caller only ever sees text.
//
// Pages in this market are frequently windows-1250 or iso-8859-2 with a
// lying (or missing) charset declaration, so decoding goes: Content-Type
// header, then <meta charset>, then a chardetng sniff.

use std::time::Duration;

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

/// Hard cap per fetch; a page slower than this is treated as failed.
pub const FETCH_TIMEOUT_SECS: u64 = 15;

/// HTTP client for competitor pages.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; OsnovaBot/0.1; +https://example.com/bot)")
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch a page and return its decoded body.
    ///
    /// Any failure (connect error, timeout, non-2xx status) is logged
    /// and swallowed; the result is then an empty string.
    pub async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = url, error = %e, "Fetch failed, treating page as empty");
                String::new()
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("{url} returned {}", response.status());
        }

        let declared = header_charset(&response);
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body: {url}"))?;

        debug!(url = url, bytes = bytes.len(), "Fetched page");
        Ok(decode_bytes(&bytes, declared.as_deref()))
    }
}

fn header_charset(response: &reqwest::Response) -> Option<String> {
    let content_type = response.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    charset_param(content_type).map(|s| s.to_string())
}

/// Pull the charset parameter out of a Content-Type value.
fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}

/// Decode a page body: declared charset first (header, then an early
/// <meta charset>), then a chardetng guess over the raw bytes.
pub fn decode_bytes(bytes: &[u8], declared: Option<&str>) -> String {
    let encoding = declared
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| meta_charset(bytes).and_then(|label| Encoding::for_label(label.as_bytes())))
        .unwrap_or_else(|| {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        });

    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Scan the first 1024 bytes for `charset=...` inside a meta tag, the way
/// browsers pre-scan. Good enough for the declared-but-not-in-header case.
fn meta_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(1024)];
    let head = String::from_utf8_lossy(head).to_lowercase();
    let at = head.find("charset=")?;
    let rest = &head[at + "charset=".len()..];
    let label: String = rest
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    (!label.is_empty()).then_some(label)
}
