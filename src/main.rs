use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use osnova::analysis::stem::parse_language;
use osnova::config::Config;
use osnova::fetch::page::PageFetcher;
use osnova::generate::openai::OpenAiGenerator;
use osnova::generate::traits::OutlineGenerator;
use osnova::intent::detect_intent;
use osnova::output::{markdown, terminal};
use osnova::pipeline::outline::{analyze_corpus, run, OutlineOptions};
use osnova::search::serpapi::SerpApiClient;
use osnova::search::traits::SearchHit;

/// Osnova: SEO article outline generator.
///
/// Analyzes the top Google results for a query, ranks their keywords by
/// frequency and corpus weight, and drafts an article outline (headers,
/// bullet points, meta tags) from the findings.
#[derive(Parser)]
#[command(name = "osnova", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an article outline for a search query
    Outline {
        /// The search query to build an outline for
        query: String,

        /// Number of competitor pages to analyze (default: 3)
        #[arg(long, default_value = "3")]
        results: u32,

        /// Stemming language: cz or en
        #[arg(long, default_value = "cz")]
        lang: String,

        /// Minimum keyword length in characters
        #[arg(long, default_value = "3")]
        min_length: u32,

        /// Print the keyword analysis and skip outline generation
        #[arg(long)]
        keywords_only: bool,
    },

    /// Analyze specific competitor pages without searching
    Analyze {
        /// Page URLs to fetch and analyze
        #[arg(required = true)]
        urls: Vec<String>,

        /// Stemming language: cz or en
        #[arg(long, default_value = "cz")]
        lang: String,

        /// Minimum keyword length in characters
        #[arg(long, default_value = "3")]
        min_length: u32,
    },

    /// Show the detected search intent for a query
    Intent {
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("osnova=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Outline {
            query,
            results,
            lang,
            min_length,
            keywords_only,
        } => {
            let config = Config::load()?;
            config.require_serpapi()?;
            if !keywords_only {
                config.require_openai()?;
            }

            let search = SerpApiClient::new(&config.serpapi_url, config.serpapi_api_key.clone())?;
            let fetcher = PageFetcher::new()?;

            let generator = (!keywords_only).then(|| {
                OpenAiGenerator::new(
                    &config.openai_url,
                    config.openai_api_key.clone(),
                    config.openai_model.clone(),
                )
            });

            let opts = OutlineOptions {
                language: parse_language(&lang),
                result_count: results as usize,
                min_term_len: min_length as usize,
                ..OutlineOptions::default()
            };

            println!("Searching competitors for: {}", query.bold());

            let report = run(
                &search,
                &fetcher,
                generator.as_ref().map(|g| g as &dyn OutlineGenerator),
                &query,
                &opts,
            )
            .await?;

            terminal::display_report(&report);

            if report.outline.is_some() {
                let path = markdown::write_report(&report, "output/osnova-outline.md")?;
                println!("\n{}", format!("Markdown report saved to: {path}").bold());
            } else {
                println!(
                    "\n{}",
                    "Keyword analysis only — rerun without --keywords-only for the outline."
                        .dimmed()
                );
            }
        }

        Commands::Analyze {
            urls,
            lang,
            min_length,
        } => {
            let fetcher = PageFetcher::new()?;

            let hits: Vec<SearchHit> = urls
                .into_iter()
                .map(|url| SearchHit {
                    title: url.clone(),
                    url,
                })
                .collect();

            let opts = OutlineOptions {
                language: parse_language(&lang),
                min_term_len: min_length as usize,
                ..OutlineOptions::default()
            };

            info!(pages = hits.len(), "Analyzing pages directly");
            println!("Analyzing {} page(s)...", hits.len());

            let analysis = analyze_corpus(&fetcher, &hits, &opts).await?;

            for (i, competitor) in analysis.competitors.iter().enumerate() {
                terminal::display_competitor(i, competitor);
            }
            terminal::display_rankings(&analysis);
        }

        Commands::Intent { query } => {
            println!("{}", detect_intent(&query));
        }
    }

    Ok(())
}
