//! URL-to-metadata synthesis

use crate::core::metadata::VideoMetadata;
use crate::core::platform::Platform;
use crate::download::TEARS_OF_STEEL_URL;
use crate::utils::hash::{hash_bucket, rolling_hash};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Literal token that short-circuits synthesis to a curated record
pub const DEMO_TOKEN: &str = "s_693d920bc7d08191bbfdce2305b6b20a";

/// Curated record fields for the demo token
pub const DEMO_TITLE: &str = "Sora: Stylized Tokyo Street Walk - AI Generated";
pub const DEMO_THUMBNAIL_URL: &str =
    "https://images.unsplash.com/photo-1542051841857-5f90071e7989?q=80&w=800&auto=format&fit=crop";
pub const DEMO_DURATION: &str = "01:00";
pub const DEMO_SIZE_LABEL: &str = "48.5 MB";

/// Default simulated processing delay before metadata is returned
const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Stateless URL-to-metadata synthesizer.
///
/// Every call recomputes from scratch; nothing is cached between calls.
pub struct Synthesizer {
    delay: Duration,
}

impl Synthesizer {
    /// Create a synthesizer with the default processing delay
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Set the simulated processing delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Synthesize a metadata record for the given URL.
    ///
    /// Never fails: unparseable input degrades to a generic
    /// platform-labeled record. The same URL always yields the same
    /// platform and thumbnail; only `id` varies between calls.
    pub async fn synthesize(&self, url: &str) -> VideoMetadata {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let platform = Platform::detect(url);
        debug!("Detected platform {} for {}", platform, url);

        // The demo token wins over every other heuristic
        if url.contains(DEMO_TOKEN) {
            info!("Demo token matched, returning curated record");
            return VideoMetadata {
                id: fresh_id(),
                source_url: url.to_string(),
                title: DEMO_TITLE.to_string(),
                thumbnail_url: DEMO_THUMBNAIL_URL.to_string(),
                duration: DEMO_DURATION.to_string(),
                size_label: DEMO_SIZE_LABEL.to_string(),
                platform,
                download_override: Some(TEARS_OF_STEEL_URL.to_string()),
            };
        }

        let hash = rolling_hash(url);
        let mut thumbnail_url = picsum_url(hash_bucket(hash, 1000));
        let mut title = "Viral Video Download".to_string();
        let mut duration = "00:45".to_string();
        let mut size_label = "14.2 MB".to_string();

        match Url::parse(url) {
            Ok(parsed) => {
                let segments: Vec<&str> = parsed
                    .path_segments()
                    .map(|s| s.filter(|part| !part.is_empty()).collect())
                    .unwrap_or_default();
                let last_segment = segments.last().copied();

                match platform {
                    Platform::Sora => {
                        title = format!(
                            "Sora AI Generation - {}",
                            truncated_or(last_segment, 8, "Preview")
                        );
                        duration = "01:00".to_string();
                        size_label = "45.2 MB".to_string();
                        // Narrow bucket biased toward a "tech" visual set
                        thumbnail_url = picsum_url(hash_bucket(hash, 10) + 10);
                    }
                    Platform::TikTok => {
                        let handle = segments
                            .iter()
                            .find(|part| part.starts_with('@'))
                            .copied()
                            .unwrap_or("User");
                        title = format!(
                            "TikTok by {} - {}",
                            handle,
                            last_segment.unwrap_or("Video")
                        );
                    }
                    Platform::Instagram => {
                        title = format!(
                            "Instagram Reel - {}",
                            truncated_or(last_segment, 10, "Post")
                        );
                    }
                    Platform::YouTube => {
                        let video_id = parsed
                            .query_pairs()
                            .find(|(key, _)| key == "v")
                            .map(|(_, value)| value.to_string());
                        title = format!(
                            "YouTube Short - {}",
                            video_id
                                .as_deref()
                                .or(last_segment)
                                .unwrap_or("Video")
                        );
                    }
                    Platform::Twitter | Platform::Unknown => {
                        title = format!(
                            "Video from {}",
                            parsed.host_str().unwrap_or("unknown")
                        );
                    }
                }
            }
            Err(e) => {
                debug!("Structural parse failed ({}), using generic title", e);
                title = if platform == Platform::Sora {
                    "Sora AI Generated Video".to_string()
                } else {
                    "Social Media Content".to_string()
                };
            }
        }

        VideoMetadata {
            id: fresh_id(),
            source_url: url.to_string(),
            title,
            thumbnail_url,
            duration,
            size_label,
            platform,
            download_override: None,
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a session-unique id token
fn fresh_id() -> String {
    format!("vid_{}", chrono::Utc::now().timestamp_millis())
}

fn picsum_url(image_id: u32) -> String {
    format!("https://picsum.photos/id/{}/800/600", image_id)
}

/// Take at most `max` characters of the segment, or the fallback when
/// the segment is missing or empty
fn truncated_or(segment: Option<&str>, max: usize, fallback: &str) -> String {
    match segment {
        Some(part) if !part.is_empty() => part.chars().take(max).collect(),
        _ => fallback.to_string(),
    }
}
