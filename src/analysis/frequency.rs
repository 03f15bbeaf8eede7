// Per-document keyword frequency ranking.
//
// Counts stems, not surface forms, so inflected variants of one word pool
// into a single entry. Each stem is displayed as the FIRST surface form
// that produced it, not the most frequent one. That choice is about
// determinism: ties between variant spellings always resolve to whichever
// appeared first in the token stream.

use std::collections::HashMap;

use anyhow::Result;

use super::stem::Stemmer;

/// How many keywords a per-document ranking keeps by default.
pub const DEFAULT_TOP_KEYWORDS: usize = 20;

/// One entry of a per-document frequency ranking.
///
/// `stem` is carried along so cross-document aggregation can merge entries
/// whose representative spellings differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedKeyword {
    /// Representative surface form (first occurrence of the stem).
    pub term: String,
    /// The stem the count is keyed on.
    pub stem: String,
    /// Occurrence count of the stem in this document.
    pub count: usize,
}

/// Rank the stems of a filtered term sequence by occurrence count.
///
/// Returns at most `top_n` entries, sorted by descending count; equal
/// counts keep first-occurrence order (stable sort). Asking for more
/// entries than there are distinct stems returns them all.
///
/// `top_n == 0` is a configuration error, not a request for an empty list.
pub fn rank_keywords(terms: &[String], stemmer: &Stemmer, top_n: usize) -> Result<Vec<RankedKeyword>> {
    if top_n == 0 {
        anyhow::bail!("top_n must be at least 1 (got 0)");
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<RankedKeyword> = Vec::new();

    for term in terms {
        let stem = stemmer.stem(term);
        match index.get(&stem) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(stem.clone(), entries.len());
                entries.push(RankedKeyword {
                    term: term.clone(),
                    stem,
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    Ok(entries)
}
