// Outline pipeline: one user query in, keyword rankings and an outline out.
//
// Stages: detect intent → search → fetch competitor pages (bounded
// concurrency) → per-document keyword analysis → corpus aggregation and
// weighting → prompt → generation. A failed fetch degrades to an empty
// document and the run continues; only an empty SERP or a fully empty
// corpus stops it.

use anyhow::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::analysis::aggregate::{aggregate_rankings, AggregatedKeyword, DEFAULT_TOP_AGGREGATED};
use crate::analysis::frequency::{RankedKeyword, DEFAULT_TOP_KEYWORDS};
use crate::analysis::stem::Language;
use crate::analysis::tokenize::DEFAULT_MIN_TERM_LEN;
use crate::analysis::weighting::{rank_corpus_terms, WeightedTerm, DEFAULT_TOP_WEIGHTED};
use crate::analysis::{Document, KeywordAnalyzer};
use crate::fetch::extract::extract_text;
use crate::fetch::page::PageFetcher;
use crate::generate::prompt::{CompetitorSummary, OutlineBrief, PROMPT_KEYWORD_LIMIT};
use crate::generate::traits::OutlineGenerator;
use crate::intent::{detect_intent, SearchIntent};
use crate::output::truncate_chars;
use crate::search::traits::{SearchHit, SearchProvider};

/// Characters of extracted text kept as a per-competitor preview.
const PREVIEW_CHARS: usize = 2000;

/// Tunables for one run. Defaults mirror the small-corpus sweet spot:
/// three competitors, three concurrent fetches.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    pub language: Language,
    /// How many search results to analyze.
    pub result_count: usize,
    pub min_term_len: usize,
    /// Per-document keyword ranking size.
    pub top_keywords: usize,
    /// Corpus-weighted ranking size.
    pub top_weighted: usize,
    /// Aggregated frequency ranking size.
    pub top_aggregated: usize,
    pub fetch_concurrency: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            result_count: 3,
            min_term_len: DEFAULT_MIN_TERM_LEN,
            top_keywords: DEFAULT_TOP_KEYWORDS,
            top_weighted: DEFAULT_TOP_WEIGHTED,
            top_aggregated: DEFAULT_TOP_AGGREGATED,
            fetch_concurrency: 3,
        }
    }
}

/// One analyzed competitor, ready for display.
#[derive(Debug, Clone)]
pub struct CompetitorReport {
    pub url: String,
    pub title: String,
    /// First chunk of the extracted plain text.
    pub preview: String,
    pub keywords: Vec<RankedKeyword>,
}

/// Corpus-level analysis results (everything except the outline itself).
#[derive(Debug, Clone)]
pub struct CorpusAnalysis {
    pub competitors: Vec<CompetitorReport>,
    pub primary_keywords: Vec<AggregatedKeyword>,
    pub weighted_keywords: Vec<WeightedTerm>,
}

/// Full result of an outline run.
#[derive(Debug, Clone)]
pub struct OutlineReport {
    pub query: String,
    pub intent: SearchIntent,
    pub analysis: CorpusAnalysis,
    /// None when generation was skipped (--keywords-only).
    pub outline: Option<String>,
}

/// Run the whole pipeline for one query.
pub async fn run(
    search: &dyn SearchProvider,
    fetcher: &PageFetcher,
    generator: Option<&dyn OutlineGenerator>,
    query: &str,
    opts: &OutlineOptions,
) -> Result<OutlineReport> {
    let intent = detect_intent(query);
    info!(query = query, intent = %intent, "Starting outline run");

    let hits = search.search(query, opts.result_count).await?;
    if hits.is_empty() {
        anyhow::bail!("Search returned no results for \"{query}\" — nothing to analyze");
    }

    let analysis = analyze_corpus(fetcher, &hits, opts).await?;

    let outline = match generator {
        Some(generator) => {
            let brief = build_brief(query, intent, &analysis);
            Some(generator.generate(&brief).await?)
        }
        None => None,
    };

    Ok(OutlineReport {
        query: query.to_string(),
        intent,
        analysis,
        outline,
    })
}

/// Fetch and analyze a set of competitor pages.
///
/// Fetches run `fetch_concurrency` at a time but results stay in SERP
/// order: aggregation tie-breaks depend on document order, and reruns
/// must rank identically.
pub async fn analyze_corpus(
    fetcher: &PageFetcher,
    hits: &[SearchHit],
    opts: &OutlineOptions,
) -> Result<CorpusAnalysis> {
    let analyzer = KeywordAnalyzer::with_params(opts.language, opts.min_term_len, opts.top_keywords)?;

    let pb = ProgressBar::new(hits.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Fetching [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let fetched: Vec<(Document, String)> = stream::iter(hits.iter().map(|hit| {
        let pb = &pb;
        async move {
            let html = fetcher.fetch(&hit.url).await;
            let page = extract_text(&html);
            pb.inc(1);
            let title = page.title.unwrap_or_else(|| hit.title.clone());
            (
                Document {
                    url: hit.url.clone(),
                    text: page.text,
                },
                title,
            )
        }
    }))
    .buffered(opts.fetch_concurrency.max(1))
    .collect()
    .await;
    pb.finish_and_clear();

    let mut competitors = Vec::with_capacity(fetched.len());
    let mut rankings = Vec::with_capacity(fetched.len());
    let mut corpus_terms = Vec::with_capacity(fetched.len());

    for (document, title) in &fetched {
        let analysis = analyzer.analyze(document)?;
        if analysis.terms.is_empty() {
            warn!(url = document.url, "No analyzable text extracted");
        }
        competitors.push(CompetitorReport {
            url: document.url.clone(),
            title: title.clone(),
            preview: truncate_chars(&document.text, PREVIEW_CHARS),
            keywords: analysis.keywords.clone(),
        });
        rankings.push(analysis.keywords);
        corpus_terms.push(analysis.terms);
    }

    if corpus_terms.iter().all(|terms| terms.is_empty()) {
        anyhow::bail!(
            "None of the {} pages yielded any text — nothing to analyze",
            hits.len()
        );
    }

    let primary_keywords = aggregate_rankings(&rankings, opts.top_aggregated)?;
    let weighted_keywords = rank_corpus_terms(&corpus_terms, opts.top_weighted)?;

    info!(
        competitors = competitors.len(),
        primary = primary_keywords.len(),
        weighted = weighted_keywords.len(),
        "Corpus analysis complete"
    );

    Ok(CorpusAnalysis {
        competitors,
        primary_keywords,
        weighted_keywords,
    })
}

/// Shape the analysis into the generation contract.
pub fn build_brief(query: &str, intent: SearchIntent, analysis: &CorpusAnalysis) -> OutlineBrief {
    OutlineBrief {
        query: query.to_string(),
        intent,
        primary_keywords: analysis
            .primary_keywords
            .iter()
            .map(|k| k.term.clone())
            .collect(),
        weighted_keywords: analysis
            .weighted_keywords
            .iter()
            .map(|w| w.term.clone())
            .collect(),
        competitors: analysis
            .competitors
            .iter()
            .map(|c| CompetitorSummary {
                url: c.url.clone(),
                keywords: c
                    .keywords
                    .iter()
                    .take(PROMPT_KEYWORD_LIMIT)
                    .map(|k| k.term.clone())
                    .collect(),
            })
            .collect(),
    }
}
