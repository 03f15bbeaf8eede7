// Language selection and stemming.
//
// The stemming language is an explicit parameter everywhere; nothing is
// inferred from page content. English goes through the Snowball algorithm
// via rust-stemmers, Czech uses the light stemmer in `czech`.

use rust_stemmers::Algorithm;

use super::czech;

/// Stemming language for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Czech,
    English,
}

/// Parse a language flag ("cz", "cs", "czech", "en", "english").
/// Unrecognized values fall back to Czech, the tool's home market.
pub fn parse_language(s: &str) -> Language {
    match s.to_lowercase().as_str() {
        "en" | "english" => Language::English,
        _ => Language::Czech,
    }
}

/// Deterministic `term → stem` reduction for one language.
///
/// Stemming a term twice may reduce it further (the underlying algorithms
/// make no idempotency promise); callers stem each surface term exactly
/// once.
pub struct Stemmer {
    inner: Inner,
}

enum Inner {
    Czech,
    English(rust_stemmers::Stemmer),
}

impl Stemmer {
    pub fn new(language: Language) -> Self {
        let inner = match language {
            Language::Czech => Inner::Czech,
            Language::English => Inner::English(rust_stemmers::Stemmer::create(Algorithm::English)),
        };
        Self { inner }
    }

    pub fn language(&self) -> Language {
        match self.inner {
            Inner::Czech => Language::Czech,
            Inner::English(_) => Language::English,
        }
    }

    /// Reduce a lowercased term to its stem.
    pub fn stem(&self, term: &str) -> String {
        match &self.inner {
            Inner::Czech => czech::stem(term),
            Inner::English(snowball) => snowball.stem(term).into_owned(),
        }
    }
}
