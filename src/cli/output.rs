//! Output formatting and progress display

use crate::cli::args::VerbosityLevel;
use crate::core::metadata::VideoMetadata;
use crate::core::platform::Platform;
use crate::suggest::SuggestionResult;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Output formatter for savesora
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
    show_progress: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel, show_progress: bool) -> Self {
        Self {
            verbosity,
            show_progress,
        }
    }

    /// Create a spinner for the processing delay or media fetch
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.verbosity == VerbosityLevel::Quiet || !self.show_progress {
            return None;
        }

        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("ℹ️  {}", message);
        }
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("✅ {}", message);
        }
    }

    /// Print warning message
    pub fn warning(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("⚠️  {}", message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    /// Print the synthesized metadata card
    pub fn print_metadata(&self, metadata: &VideoMetadata) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        // Mirror the product styling: purple badge for Sora, blue otherwise
        let badge = match metadata.platform {
            Platform::Sora => metadata.platform.label().magenta().bold(),
            _ => metadata.platform.label().blue().bold(),
        };

        println!("📹 [{}] {}", badge, metadata.title);
        println!("⏱️  {} • {}", metadata.duration, metadata.size_label);
        println!("🖼️  {}", metadata.thumbnail_url);
        if self.verbosity == VerbosityLevel::Verbose {
            println!("🔗 {}", metadata.source_url);
            println!("🆔 {}", metadata.id);
        }
        println!();
    }

    /// Print AI suggestions
    pub fn print_suggestions(&self, suggestions: &SuggestionResult) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!(
            "✨ AI Suggestions — Viral Score: {}/100",
            suggestions.viral_score
        );
        println!("💬 Captions:");
        for caption in &suggestions.captions {
            println!("   - {}", caption);
        }
        println!("#️⃣  {}", suggestions.hashtags.join(" "));
        println!();
    }

    /// Print download complete message
    pub fn print_download_complete(&self, path: &Path, duration: Duration) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!("✅ Download completed!");
        println!("💾 Saved to: {}", path.display());
        println!("⏱️  Time: {}", format_duration(duration));
    }

    /// Print the fallback link when the media fetch fails
    pub fn print_fallback_link(&self, url: &str) {
        self.warning("Download failed; open this link in your browser to save the video:");
        println!("🔗 {}", url);
    }
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    if total_seconds < 60 {
        format!("{}s", total_seconds)
    } else if total_seconds < 3600 {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        if seconds == 0 {
            format!("{}m", minutes)
        } else {
            format!("{}m {}s", minutes, seconds)
        }
    } else {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        if minutes == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, minutes)
        }
    }
}
