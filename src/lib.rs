//! # savesora - Social Video Downloader Demo
//!
//! Simulates a social-media video downloader: paste a URL, get plausible
//! synthesized metadata and a sample media download, with optional AI
//! caption/hashtag suggestions.
//!
//! ## Features
//!
//! - Platform detection for TikTok, Instagram, YouTube, Twitter/X and Sora links
//! - Deterministic metadata synthesis with stable thumbnail selection
//! - Streaming sample media download
//! - Gemini-backed caption and hashtag suggestions with a static fallback
//!
//! ## Example
//!
//! ```rust,no_run
//! use savesora::Synthesizer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let synthesizer = Synthesizer::new();
//!     let metadata = synthesizer
//!         .synthesize("https://www.tiktok.com/@creator1/video/123")
//!         .await;
//!     println!("{} ({})", metadata.title, metadata.platform);
//! }
//! ```

pub mod cli;
pub mod core;
pub mod download;
pub mod error;
pub mod suggest;
pub mod utils;

// Re-export main types
pub use crate::core::{Platform, Synthesizer, VideoMetadata};
pub use crate::download::{FetchOutcome, MediaFetcher};
pub use crate::error::SaveSoraError;
pub use crate::suggest::{GeminiClient, SuggestionProvider, SuggestionResult};

/// Result type alias for savesora operations
pub type Result<T> = std::result::Result<T, SaveSoraError>;
