// Prompt assembly for the outline generator.
//
// The brief is the full contract with the generation service: the query,
// the detected intent, both keyword rankings, and one line per competitor.
// Keyword lists are capped at ten entries in the prompt; past that they
// add noise to the outline, not signal.

use std::fmt::Write as _;

use crate::intent::SearchIntent;

/// How many keywords a single prompt line carries at most.
pub const PROMPT_KEYWORD_LIMIT: usize = 10;

/// One competitor's contribution to the prompt.
#[derive(Debug, Clone)]
pub struct CompetitorSummary {
    pub url: String,
    /// Representative keywords, best first.
    pub keywords: Vec<String>,
}

/// Everything the generation service needs to draft an outline.
#[derive(Debug, Clone)]
pub struct OutlineBrief {
    pub query: String,
    pub intent: SearchIntent,
    /// Aggregated frequency ranking across the corpus, best first.
    pub primary_keywords: Vec<String>,
    /// Corpus-weighted (tf-idf) ranking, best first.
    pub weighted_keywords: Vec<String>,
    pub competitors: Vec<CompetitorSummary>,
}

/// System message: what the model is and what shape it must produce.
pub fn system_prompt() -> &'static str {
    "You are an expert Czech SEO strategist. \
     Generate ONLY a detailed outline (H1, H2, optional H3) with bullet-point notes, \
     a meta-title (<=60 char) and meta-description (<=155 char). \
     Also suggest 3-5 internal links (anchor text + slug). \
     Do NOT write full paragraphs."
}

/// User message: the analysis results, one section per concern.
pub fn user_prompt(brief: &OutlineBrief) -> String {
    let mut prompt = String::new();

    let _ = writeln!(prompt, "Search query: {}", brief.query);
    let _ = writeln!(prompt, "Search intent: {}", brief.intent);
    let _ = writeln!(
        prompt,
        "Primary keywords: {}",
        join_limited(&brief.primary_keywords)
    );
    let _ = writeln!(
        prompt,
        "LSI keywords: {}",
        brief.weighted_keywords.join(", ")
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Competitor snapshot:");
    for (i, competitor) in brief.competitors.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {}", i + 1, competitor.url);
        let _ = writeln!(prompt, "   KW: {}", join_limited(&competitor.keywords));
    }

    prompt
}

fn join_limited(keywords: &[String]) -> String {
    keywords
        .iter()
        .take(PROMPT_KEYWORD_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> OutlineBrief {
        OutlineBrief {
            query: "jak vybrat pračku".to_string(),
            intent: SearchIntent::Informational,
            primary_keywords: (0..15).map(|i| format!("kw{i}")).collect(),
            weighted_keywords: vec!["pračka se sušičkou".to_string(), "úspora vody".to_string()],
            competitors: vec![CompetitorSummary {
                url: "https://example.cz/pracky".to_string(),
                keywords: vec!["pračka".to_string(), "buben".to_string()],
            }],
        }
    }

    #[test]
    fn test_user_prompt_sections() {
        let prompt = user_prompt(&brief());
        assert!(prompt.contains("Search query: jak vybrat pračku"));
        assert!(prompt.contains("Search intent: informational"));
        assert!(prompt.contains("LSI keywords: pračka se sušičkou, úspora vody"));
        assert!(prompt.contains("1. https://example.cz/pracky"));
        assert!(prompt.contains("   KW: pračka, buben"));
    }

    #[test]
    fn test_primary_keywords_capped_at_ten() {
        let prompt = user_prompt(&brief());
        assert!(prompt.contains("kw9"));
        assert!(!prompt.contains("kw10"));
    }

    #[test]
    fn test_system_prompt_is_outline_only() {
        assert!(system_prompt().contains("outline"));
        assert!(system_prompt().contains("Do NOT write full paragraphs"));
    }
}
