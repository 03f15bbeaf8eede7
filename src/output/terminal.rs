// Colored terminal output for competitor summaries and keyword rankings.
//
// This module handles all terminal-specific formatting: colors, tables,
// section headers. The main.rs display flow delegates here.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::pipeline::outline::{CompetitorReport, CorpusAnalysis, OutlineReport};

/// Display one analyzed competitor: title, URL, its top keywords.
pub fn display_competitor(index: usize, competitor: &CompetitorReport) {
    println!("\n{}. {}", index + 1, competitor.title.bold());
    println!("   {}", competitor.url.dimmed());

    if competitor.keywords.is_empty() {
        println!("   {}", "No keywords (page yielded no text)".yellow());
        return;
    }

    let keywords = competitor
        .keywords
        .iter()
        .take(10)
        .map(|k| format!("{} ({})", k.term, k.count))
        .collect::<Vec<_>>()
        .join(", ");
    println!("   Top keywords: {keywords}");

    if !competitor.preview.is_empty() {
        println!("   {}", truncate_chars(&competitor.preview, 180).dimmed());
    }
}

/// Display both corpus-level rankings.
pub fn display_rankings(analysis: &CorpusAnalysis) {
    println!(
        "\n{}",
        format!(
            "=== Corpus Keywords ({} competitors) ===",
            analysis.competitors.len()
        )
        .bold()
    );

    println!("\n  {}", "By frequency (aggregated)".bold());
    if analysis.primary_keywords.is_empty() {
        println!("  {}", "(empty)".dimmed());
    }
    for (i, keyword) in analysis.primary_keywords.iter().enumerate().take(20) {
        println!("  {:>3}. {:<28} {:>5}", i + 1, keyword.term, keyword.count);
    }

    println!("\n  {}", "By corpus weight (tf-idf)".bold());
    if analysis.weighted_keywords.is_empty() {
        println!("  {}", "(empty)".dimmed());
    }
    for (i, weighted) in analysis.weighted_keywords.iter().enumerate() {
        println!(
            "  {:>3}. {:<28} {:>8.3}",
            i + 1,
            weighted.term,
            weighted.score
        );
    }
}

/// Display the full run result: competitors, rankings, then the outline.
pub fn display_report(report: &OutlineReport) {
    println!(
        "Detected intent: {}",
        report.intent.to_string().bold()
    );

    for (i, competitor) in report.analysis.competitors.iter().enumerate() {
        display_competitor(i, competitor);
    }

    display_rankings(&report.analysis);

    if let Some(outline) = &report.outline {
        println!("\n{}", "=== Outline ===".bold());
        println!("\n{outline}");
    }
}
