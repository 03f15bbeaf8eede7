// Cross-document keyword aggregation.
//
// Merges each competitor's frequency ranking into one corpus-level list by
// summing counts per STEM. Keying on the stem (instead of the per-document
// representative spelling) means "pračka" on one page and "pračky" on
// another land in the same row; the first representative encountered in
// document order is the one displayed.

use std::collections::HashMap;

use anyhow::Result;

use super::frequency::RankedKeyword;

/// How many aggregated keywords the corpus ranking keeps by default.
pub const DEFAULT_TOP_AGGREGATED: usize = 40;

/// One entry of the aggregated corpus ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedKeyword {
    /// First representative surface form seen for the stem, any document.
    pub term: String,
    /// Summed occurrence count across all documents.
    pub count: usize,
}

/// Merge per-document rankings into a top-`top_m` corpus ranking.
///
/// Counts sum per stem; order is descending by summed count with stable
/// ties (first document/position encountered wins). `top_m == 0` is a
/// configuration error.
pub fn aggregate_rankings(
    rankings: &[Vec<RankedKeyword>],
    top_m: usize,
) -> Result<Vec<AggregatedKeyword>> {
    if top_m == 0 {
        anyhow::bail!("top_m must be at least 1 (got 0)");
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<AggregatedKeyword> = Vec::new();

    for ranking in rankings {
        for keyword in ranking {
            match index.get(keyword.stem.as_str()) {
                Some(&i) => merged[i].count += keyword.count,
                None => {
                    index.insert(keyword.stem.as_str(), merged.len());
                    merged.push(AggregatedKeyword {
                        term: keyword.term.clone(),
                        count: keyword.count,
                    });
                }
            }
        }
    }

    merged.sort_by(|a, b| b.count.cmp(&a.count));
    merged.truncate(top_m);
    Ok(merged)
}
