// Composition tests — verifying that the stages chain together correctly.
//
// These tests exercise the data flow between modules:
//   extract → analyze → aggregate/weight → brief → prompt
// without any network calls; the search and generation collaborators are
// replaced with canned implementations.

use anyhow::Result;
use async_trait::async_trait;

use osnova::analysis::aggregate::aggregate_rankings;
use osnova::analysis::stem::Language;
use osnova::analysis::tokenize::StopWordFilter;
use osnova::analysis::weighting::rank_corpus_terms;
use osnova::analysis::{Document, KeywordAnalyzer};
use osnova::fetch::extract::extract_text;
use osnova::fetch::page::PageFetcher;
use osnova::generate::prompt::{user_prompt, OutlineBrief};
use osnova::generate::traits::OutlineGenerator;
use osnova::intent::{detect_intent, SearchIntent};
use osnova::pipeline::outline::{
    build_brief, run, CompetitorReport, CorpusAnalysis, OutlineOptions, OutlineReport,
};
use osnova::search::traits::{SearchHit, SearchProvider};

struct CannedSearch {
    hits: Vec<SearchHit>,
}

#[async_trait]
impl SearchProvider for CannedSearch {
    async fn search(&self, _query: &str, count: usize) -> Result<Vec<SearchHit>> {
        Ok(self.hits.iter().take(count).cloned().collect())
    }
}

struct CannedGenerator;

#[async_trait]
impl OutlineGenerator for CannedGenerator {
    async fn generate(&self, brief: &OutlineBrief) -> Result<String> {
        Ok(format!("# {}\n- osnova", brief.query))
    }
}

// ============================================================
// Chain: HTML → extraction → per-document analysis
// ============================================================

#[test]
fn html_page_flows_through_extraction_and_analysis() {
    let html = r#"<html><head><title>Nejlepší pračky 2024</title>
        <style>body { margin: 0 }</style></head>
        <body><h1>Pračky</h1>
        <p>Srovnání praček. Levné pračky i dražší pračky s sušičkou.</p>
        <script>trackPageview();</script></body></html>"#;

    let page = extract_text(html);
    assert!(!page.text.contains("trackPageview"));
    assert!(!page.text.contains("margin"));

    let analyzer = KeywordAnalyzer::new(Language::Czech);
    let analysis = analyzer
        .analyze(&Document {
            url: "https://example.cz/pracky".to_string(),
            text: page.text,
        })
        .unwrap();

    // inflections of "pračka" pool into the top entry
    assert_eq!(analysis.keywords[0].stem, "pračk");
    assert!(analysis.keywords[0].count >= 4);
}

// ============================================================
// Chain: documents → rankings → brief → prompt
// ============================================================

#[test]
fn corpus_analysis_feeds_the_prompt() {
    let analyzer = KeywordAnalyzer::new(Language::Czech)
        .with_stop_words(StopWordFilter::from_words(["the", "a", "i", "s"]));

    let documents = [
        Document {
            url: "https://example.cz/jedna".to_string(),
            text: "pračka pračky sušička program praní program".to_string(),
        },
        Document {
            url: "https://example.cz/dva".to_string(),
            text: "pračka cena recenze cena spotřeba".to_string(),
        },
    ];

    let mut rankings = Vec::new();
    let mut corpus_terms = Vec::new();
    let mut competitors = Vec::new();
    for document in &documents {
        let analysis = analyzer.analyze(document).unwrap();
        competitors.push(CompetitorReport {
            url: document.url.clone(),
            title: document.url.clone(),
            preview: String::new(),
            keywords: analysis.keywords.clone(),
        });
        rankings.push(analysis.keywords);
        corpus_terms.push(analysis.terms);
    }

    let analysis = CorpusAnalysis {
        competitors,
        primary_keywords: aggregate_rankings(&rankings, 40).unwrap(),
        weighted_keywords: rank_corpus_terms(&corpus_terms, 12).unwrap(),
    };

    // "pračka" appears in both documents: top of the aggregate
    assert_eq!(analysis.primary_keywords[0].term, "pračka");
    assert_eq!(analysis.primary_keywords[0].count, 3);

    let query = "jak vybrat pračku";
    let brief = build_brief(query, detect_intent(query), &analysis);
    assert_eq!(brief.intent, SearchIntent::Informational);

    let prompt = user_prompt(&brief);
    assert!(prompt.contains("Search query: jak vybrat pračku"));
    assert!(prompt.contains("Primary keywords: pračka"));
    assert!(prompt.contains("1. https://example.cz/jedna"));
    assert!(prompt.contains("2. https://example.cz/dva"));
}

// ============================================================
// Pipeline error paths (no network)
// ============================================================

#[tokio::test]
async fn empty_serp_is_nothing_to_analyze() {
    let search = CannedSearch { hits: vec![] };
    let fetcher = PageFetcher::new().unwrap();
    let opts = OutlineOptions::default();

    let result = run(&search, &fetcher, Some(&CannedGenerator), "cokoliv", &opts).await;
    let message = result.unwrap_err().to_string();
    assert!(message.contains("nothing to analyze"), "got: {message}");
}

#[tokio::test]
async fn unreachable_pages_degrade_to_empty_corpus() {
    // Fetch failures must not panic or abort mid-run; with every page
    // failing the run ends in the explicit empty-corpus error.
    let search = CannedSearch {
        hits: vec![SearchHit {
            url: "http://127.0.0.1:9/unreachable".to_string(),
            title: "unreachable".to_string(),
        }],
    };
    let fetcher = PageFetcher::new().unwrap();
    let opts = OutlineOptions::default();

    let result = run(&search, &fetcher, Some(&CannedGenerator), "cokoliv", &opts).await;
    let message = result.unwrap_err().to_string();
    assert!(message.contains("nothing to analyze"), "got: {message}");
}

// ============================================================
// Generator contract
// ============================================================

#[tokio::test]
async fn canned_generator_round_trip() {
    let report = OutlineReport {
        query: "pračky".to_string(),
        intent: SearchIntent::Informational,
        analysis: CorpusAnalysis {
            competitors: vec![],
            primary_keywords: vec![],
            weighted_keywords: vec![],
        },
        outline: None,
    };
    let brief = build_brief(&report.query, report.intent, &report.analysis);
    let outline = CannedGenerator.generate(&brief).await.unwrap();
    assert_eq!(outline, "# pračky\n- osnova");
}
