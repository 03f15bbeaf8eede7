// Corpus-level term weighting (smoothed TF-IDF).
//
// Scores a term by how much it matters across the whole corpus rather than
// inside one page: terms concentrated in a few documents get boosted,
// terms on every page get discounted. The weighting runs over surface
// terms (stop words already removed), not stems.
//
// The idf uses a smoothed denominator:
//
//   idf(t) = ln(N / (1 + df(t)))
//
// The +1 keeps the quotient finite and pushes ubiquitous terms to zero or
// below. Downstream ranking depends on the relative ordering this exact
// formula produces, so the denominator is 1 + df, not df.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use anyhow::Result;

/// How many weighted terms the corpus ranking keeps by default.
pub const DEFAULT_TOP_WEIGHTED: usize = 12;

/// One entry of the corpus-weighted ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTerm {
    pub term: String,
    /// tf(t) * ln(N / (1 + df(t))); may be negative for ubiquitous terms.
    pub score: f64,
}

/// Rank terms across the corpus by tf·idf.
///
/// `docs` holds one filtered term sequence per document; empty sequences
/// (failed fetches) still count toward N but contribute nothing to tf or
/// df. An empty corpus yields an empty ranking. Equal scores keep
/// first-encountered order across the corpus scan.
///
/// `top_k == 0` is a configuration error.
pub fn rank_corpus_terms(docs: &[Vec<String>], top_k: usize) -> Result<Vec<WeightedTerm>> {
    if top_k == 0 {
        anyhow::bail!("top_k must be at least 1 (got 0)");
    }
    if docs.is_empty() {
        return Ok(Vec::new());
    }

    // Single pass in corpus order: tf accumulates every occurrence, df
    // counts each document at most once. `order` pins the tie-break.
    let mut order: Vec<String> = Vec::new();
    let mut stats: HashMap<String, (usize, usize)> = HashMap::new();

    for doc in docs {
        let mut seen_here: HashSet<&str> = HashSet::new();
        for term in doc {
            let entry = stats.entry(term.clone()).or_insert_with(|| {
                order.push(term.clone());
                (0, 0)
            });
            entry.0 += 1;
            if seen_here.insert(term.as_str()) {
                entry.1 += 1;
            }
        }
    }

    let n = docs.len() as f64;
    let mut ranked: Vec<WeightedTerm> = order
        .into_iter()
        .map(|term| {
            let (tf, df) = stats[&term];
            let idf = (n / (1.0 + df as f64)).ln();
            WeightedTerm {
                term,
                score: tf as f64 * idf,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(top_k);
    Ok(ranked)
}
