//! Main entry point for savesora CLI

use clap::Parser;
use savesora::cli::output::OutputFormatter;
use savesora::cli::Args;
use savesora::core::Synthesizer;
use savesora::download::{FetchOutcome, MediaFetcher};
use savesora::suggest::{GeminiClient, SuggestionProvider, SuggestionResult};
use savesora::utils::url::validate_input_url;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    init_logging()?;

    // Parse command line arguments
    let args = Args::parse();

    info!("Starting savesora with args: {:?}", args);

    let formatter = OutputFormatter::new(args.verbosity_level(), !args.no_progress);

    // Input validation happens before synthesis ever runs
    if let Err(e) = validate_input_url(&args.url) {
        formatter.error(&e.to_string());
        std::process::exit(1);
    }

    let start_time = Instant::now();

    // Synthesize metadata behind a processing spinner
    let synthesizer = Synthesizer::new().with_delay(args.delay_duration());
    let spinner = formatter.create_spinner("Processing video link...");
    let metadata = synthesizer.synthesize(&args.url).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    info!(
        "Synthesized metadata: platform={}, title={}",
        metadata.platform, metadata.title
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        formatter.print_metadata(&metadata);
    }

    // Download the sample media unless skipped
    if !args.skip_download {
        let fetcher = MediaFetcher::new()
            .with_output_dir(&args.output)
            .with_timeout(args.timeout_duration());

        let spinner = formatter.create_spinner("Downloading...");
        let outcome = fetcher.fetch(&metadata).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            FetchOutcome::Saved(path) => {
                formatter.print_download_complete(&path, start_time.elapsed());
            }
            FetchOutcome::Fallback(url) => {
                formatter.print_fallback_link(&url);
            }
        }
    }

    // Caption/hashtag suggestions on request
    if args.suggest {
        let suggestions = match args.resolve_api_key() {
            Some(api_key) => {
                let client =
                    GeminiClient::new(api_key).with_timeout(args.timeout_duration());
                let spinner = formatter.create_spinner("Analyzing video...");
                let result = client
                    .request_suggestions(&metadata.title, metadata.platform)
                    .await;
                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }
                result
            }
            None => {
                warn!("No Gemini API key configured, using fallback suggestions");
                SuggestionResult::fallback()
            }
        };
        formatter.print_suggestions(&suggestions);
    }

    Ok(())
}

/// Initialize logging system
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    // Get log level from environment or default to warn to keep the
    // card output readable
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    Ok(())
}
