//! Command line argument parsing

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// SaveSora - download social videos and generate repost captions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Video URL (TikTok, Instagram, YouTube, Twitter/X, Sora)
    pub url: String,

    /// Output directory for downloaded files
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub output: PathBuf,

    /// Print metadata only, skip the media download
    #[arg(long)]
    pub skip_download: bool,

    /// Generate AI caption and hashtag suggestions
    #[arg(long)]
    pub suggest: bool,

    /// Gemini API key (falls back to the GEMINI_API_KEY environment variable)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Print the metadata record as JSON
    #[arg(long)]
    pub json: bool,

    /// HTTP timeout (e.g., 30s, 1m)
    #[arg(long, value_name = "DURATION", default_value = "30s")]
    pub timeout: humantime::Duration,

    /// Simulated processing delay before metadata is shown
    #[arg(long, value_name = "DURATION", default_value = "1500ms")]
    pub delay: humantime::Duration,

    /// Disable progress output
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (only errors)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Get HTTP timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        self.timeout.into()
    }

    /// Get the simulated processing delay as Duration
    pub fn delay_duration(&self) -> Duration {
        self.delay.into()
    }

    /// Resolve the Gemini API key from the flag or the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.is_empty())
    }

    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}


// Implement Default for Args to make tests work
impl Default for Args {
    fn default() -> Self {
        Self {
            url: String::new(),
            output: PathBuf::from("."),
            skip_download: false,
            suggest: false,
            api_key: None,
            json: false,
            timeout: humantime::Duration::from(Duration::from_secs(30)),
            delay: humantime::Duration::from(Duration::from_millis(1500)),
            no_progress: false,
            verbose: false,
            quiet: false,
        }
    }
}
