//! Synthesized video metadata structures

use crate::core::platform::Platform;
use serde::{Deserialize, Serialize};

/// Fabricated metadata standing in for real extracted video metadata.
///
/// Produced once per request, immutable afterwards, owned by the caller.
/// A new request replaces the record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// Session-unique token assigned at creation time
    pub id: String,
    /// Original input URL, verbatim
    pub source_url: String,
    /// Synthesized descriptive title
    pub title: String,
    /// Representative image URI
    pub thumbnail_url: String,
    /// Display duration in MM:SS
    pub duration: String,
    /// Display size label, "<number> MB"
    pub size_label: String,
    /// Detected source platform
    pub platform: Platform,
    /// Optional direct media reference; takes precedence over the
    /// platform default during download
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_override: Option<String>,
}
