// Tokenization and stop-word filtering.
//
// A term is a maximal run of alphabetic code points, lowercased. Digits and
// underscores break runs: "iphone15" yields "iphone", "snake_case" yields
// "snake" and "case". Runs shorter than the minimum length are dropped.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Minimum term length used when nothing else is configured.
/// A looser setting of 2 admits two-letter terms at the cost of far more
/// noise.
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

/// Split text into lowercase alphabetic terms of at least `min_len` code
/// points, in order of appearance. Duplicates are retained.
///
/// Empty or fully non-alphabetic input yields an empty vec.
pub fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    let mut terms = Vec::new();
    let mut run = String::new();
    let mut run_len = 0usize;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            run.extend(ch.to_lowercase());
            run_len += 1;
        } else if run_len > 0 {
            if run_len >= min_len {
                terms.push(std::mem::take(&mut run));
            } else {
                run.clear();
            }
            run_len = 0;
        }
    }
    if run_len >= min_len {
        terms.push(run);
    }

    terms
}

/// Closed-class word filter over lowercased terms.
///
/// The default set is the union of the Czech and English lists from the
/// stop-words crate. Queries and competitor pages in this domain mix both
/// languages freely, so filtering is always bilingual rather than switched
/// by the stemming language.
pub struct StopWordFilter {
    words: HashSet<String>,
}

impl StopWordFilter {
    /// Build the standard bilingual (Czech + English) filter.
    pub fn bilingual() -> Self {
        let words = get(LANGUAGE::Czech)
            .into_iter()
            .chain(get(LANGUAGE::English))
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Build a filter from an explicit word list. Tests use this to pin the
    /// set down; production code always goes through `bilingual`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    /// Check a single (lowercased) term.
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    /// Remove stop words from a term sequence, preserving order.
    pub fn filter(&self, terms: Vec<String>) -> Vec<String> {
        terms.into_iter().filter(|t| !self.words.contains(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let terms = tokenize("Koupit novou pračku, nebo opravit starou?", 3);
        assert_eq!(
            terms,
            vec!["koupit", "novou", "pračku", "nebo", "opravit", "starou"]
        );
    }

    #[test]
    fn test_tokenize_digits_and_underscores_break_runs() {
        assert_eq!(tokenize("iphone15pro max_verze", 3), vec!["iphone", "pro", "max", "verze"]);
    }

    #[test]
    fn test_tokenize_min_length() {
        assert_eq!(tokenize("a na tri ctyri", 3), vec!["tri", "ctyri"]);
        assert_eq!(tokenize("a na tri", 2), vec!["na", "tri"]);
    }

    #[test]
    fn test_tokenize_empty_and_nonalphabetic() {
        assert!(tokenize("", 3).is_empty());
        assert!(tokenize("123 456 --- _ !!", 3).is_empty());
    }

    #[test]
    fn test_tokenize_keeps_duplicates_in_order() {
        assert_eq!(tokenize("pes pes kočka pes", 3), vec!["pes", "pes", "kočka", "pes"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = StopWordFilter::from_words(["the", "že"]);
        let terms = vec!["the".to_string(), "cat".to_string(), "že".to_string(), "pes".to_string()];
        assert_eq!(filter.filter(terms), vec!["cat", "pes"]);
    }

    #[test]
    fn test_bilingual_covers_both_languages() {
        let filter = StopWordFilter::bilingual();
        assert!(filter.is_stop_word("the"));
        assert!(filter.is_stop_word("aby"));
        assert!(!filter.is_stop_word("pračka"));
    }
}
