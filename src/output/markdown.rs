// Markdown report generation.
//
// Writes the outline plus the supporting keyword analysis to a file so a
// run's result survives the terminal scrollback.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::pipeline::outline::OutlineReport;

/// Write the report to `path`, creating parent directories as needed.
/// Returns the path for display.
pub fn write_report(report: &OutlineReport, path: &str) -> Result<String> {
    let markdown = render(report);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, markdown).with_context(|| format!("Failed to write {path}"))?;

    Ok(path.to_string())
}

fn render(report: &OutlineReport) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# Outline: {}", report.query);
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "Generated {} · intent: {}",
        Local::now().format("%Y-%m-%d %H:%M"),
        report.intent
    );

    let _ = writeln!(md);
    let _ = writeln!(md, "## Keywords by frequency");
    let _ = writeln!(md);
    for keyword in &report.analysis.primary_keywords {
        let _ = writeln!(md, "- {} ({})", keyword.term, keyword.count);
    }

    let _ = writeln!(md);
    let _ = writeln!(md, "## Keywords by corpus weight");
    let _ = writeln!(md);
    for weighted in &report.analysis.weighted_keywords {
        let _ = writeln!(md, "- {} ({:.3})", weighted.term, weighted.score);
    }

    let _ = writeln!(md);
    let _ = writeln!(md, "## Competitors");
    let _ = writeln!(md);
    for competitor in &report.analysis.competitors {
        let keywords = competitor
            .keywords
            .iter()
            .take(10)
            .map(|k| k.term.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(md, "- [{}]({}): {}", competitor.title, competitor.url, keywords);
    }

    if let Some(outline) = &report.outline {
        let _ = writeln!(md);
        let _ = writeln!(md, "---");
        let _ = writeln!(md);
        let _ = writeln!(md, "{outline}");
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate::AggregatedKeyword;
    use crate::intent::SearchIntent;
    use crate::pipeline::outline::CorpusAnalysis;

    #[test]
    fn test_render_sections() {
        let report = OutlineReport {
            query: "jak vybrat pračku".to_string(),
            intent: SearchIntent::Informational,
            analysis: CorpusAnalysis {
                competitors: vec![],
                primary_keywords: vec![AggregatedKeyword {
                    term: "pračka".to_string(),
                    count: 12,
                }],
                weighted_keywords: vec![],
            },
            outline: Some("# H1\n- bod".to_string()),
        };

        let md = render(&report);
        assert!(md.starts_with("# Outline: jak vybrat pračku"));
        assert!(md.contains("- pračka (12)"));
        assert!(md.contains("# H1"));
    }
}
