// Keyword analysis — tokenization, stop words, stemming, frequency and
// corpus weighting. Everything in here is a pure transformation over one
// run's documents; no state survives a run.

pub mod aggregate;
pub mod czech;
pub mod frequency;
pub mod stem;
pub mod tokenize;
pub mod weighting;

use anyhow::Result;

use self::frequency::{rank_keywords, RankedKeyword, DEFAULT_TOP_KEYWORDS};
use self::stem::{Language, Stemmer};
use self::tokenize::{tokenize, StopWordFilter, DEFAULT_MIN_TERM_LEN};

/// One fetched competitor page, reduced to plain text.
/// Immutable once built; lives for a single analysis run.
#[derive(Debug, Clone)]
pub struct Document {
    pub url: String,
    pub text: String,
}

/// Everything the rest of the pipeline needs from one document: the ranked
/// keywords for display/aggregation, and the filtered surface terms the
/// corpus weighter consumes.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub url: String,
    pub keywords: Vec<RankedKeyword>,
    /// Filtered (not stemmed) terms, in emission order.
    pub terms: Vec<String>,
}

/// Per-document analysis chain: tokenize → filter → stem → rank.
///
/// Built once per run with an explicit language; holds no per-document
/// state, so one analyzer serves the whole corpus.
pub struct KeywordAnalyzer {
    filter: StopWordFilter,
    stemmer: Stemmer,
    min_term_len: usize,
    top_keywords: usize,
}

impl KeywordAnalyzer {
    /// Analyzer with default thresholds and the bilingual stop-word set.
    pub fn new(language: Language) -> Self {
        Self {
            filter: StopWordFilter::bilingual(),
            stemmer: Stemmer::new(language),
            min_term_len: DEFAULT_MIN_TERM_LEN,
            top_keywords: DEFAULT_TOP_KEYWORDS,
        }
    }

    /// Analyzer with explicit thresholds. Zero for either threshold is a
    /// configuration error.
    pub fn with_params(language: Language, min_term_len: usize, top_keywords: usize) -> Result<Self> {
        if min_term_len == 0 {
            anyhow::bail!("min_term_len must be at least 1 (got 0)");
        }
        if top_keywords == 0 {
            anyhow::bail!("top_keywords must be at least 1 (got 0)");
        }
        Ok(Self {
            filter: StopWordFilter::bilingual(),
            stemmer: Stemmer::new(language),
            min_term_len,
            top_keywords,
        })
    }

    /// Swap in a custom stop-word set (tests pin the set down with this).
    pub fn with_stop_words(mut self, filter: StopWordFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn language(&self) -> Language {
        self.stemmer.language()
    }

    /// Tokenize and stop-word-filter a text, keeping surface forms.
    pub fn filtered_terms(&self, text: &str) -> Vec<String> {
        self.filter.filter(tokenize(text, self.min_term_len))
    }

    /// Run the full per-document chain. Empty text flows through and
    /// produces an empty analysis, never an error.
    pub fn analyze(&self, document: &Document) -> Result<DocumentAnalysis> {
        let terms = self.filtered_terms(&document.text);
        let keywords = rank_keywords(&terms, &self.stemmer, self.top_keywords)?;
        Ok(DocumentAnalysis {
            url: document.url.clone(),
            keywords,
            terms,
        })
    }
}
