// Plain-text extraction from competitor HTML.
//
// Walks the parsed DOM collecting text nodes, skipping script/style/
// noscript subtrees, and joins everything with single spaces. No
// readability heuristics: boilerplate stays in, and the stop-word filter
// and corpus weighting downweight it anyway.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Extraction result: flattened body text plus the page title when the
/// document declares one.
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    pub title: Option<String>,
    pub text: String,
}

/// Elements whose text content is markup plumbing, not page copy.
const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Strip markup and return whitespace-normalized plain text.
///
/// Empty or unparseable input yields empty text; html5ever recovers from
/// almost anything, so there is no error path here.
pub fn extract_text(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let title = Selector::parse("title").ok().and_then(|sel| {
        document
            .select(&sel)
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty())
    });

    let mut raw = String::new();
    collect_text(document.root_element(), &mut raw);

    ExtractedPage {
        title,
        text: collapse_whitespace(&raw),
    }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if !SKIPPED_ELEMENTS.contains(&child_element.value().name()) {
                collect_text(child_element, out);
            }
        } else if let Node::Text(text) = child.value() {
            out.push_str(&text.text);
            out.push(' ');
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
