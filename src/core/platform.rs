//! Platform detection for social video URLs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source platform of a pasted video URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
    Twitter,
    Sora,
    Unknown,
}

/// Ordered detection rules, evaluated top to bottom over the lower-cased
/// URL. The first keyword hit wins, so precedence is fixed by table
/// position rather than by conditional nesting.
const DETECTION_RULES: &[(&[&str], Platform)] = &[
    (&["tiktok"], Platform::TikTok),
    (&["instagram"], Platform::Instagram),
    (&["youtube", "youtu.be"], Platform::YouTube),
    (&["twitter", "x.com"], Platform::Twitter),
    (&["sora"], Platform::Sora),
];

impl Platform {
    /// Detect the platform from a raw URL string.
    ///
    /// Case-insensitive substring matching; exactly one platform is
    /// assigned per input. Unrecognized input maps to `Unknown`.
    pub fn detect(url: &str) -> Self {
        let lower = url.to_lowercase();
        for (keywords, platform) in DETECTION_RULES {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return *platform;
            }
        }
        Platform::Unknown
    }

    /// Product label for display
    pub fn label(&self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
            Platform::Twitter => "Twitter",
            Platform::Sora => "Sora",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
