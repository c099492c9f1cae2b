//! Sample media fetcher
//!
//! The "download" is a plain streaming GET of a fixed public sample file
//! standing in for real media extraction.

use crate::core::metadata::VideoMetadata;
use crate::core::platform::Platform;
use crate::error::SaveSoraError;
use crate::utils::filename::download_filename;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Sample used for Sora links; reads as high-end AI footage
pub const TEARS_OF_STEEL_URL: &str =
    "https://storage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4";

/// Default sample for every other platform
pub const FOR_BIGGER_JOYRIDES_URL: &str =
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4";

/// Resolve which media file a metadata record downloads.
///
/// Priority: explicit override from the record, then the Sora sample,
/// then the general-purpose sample.
pub fn resolve_media_url(metadata: &VideoMetadata) -> String {
    if let Some(override_url) = &metadata.download_override {
        return override_url.clone();
    }
    match metadata.platform {
        Platform::Sora => TEARS_OF_STEEL_URL.to_string(),
        _ => FOR_BIGGER_JOYRIDES_URL.to_string(),
    }
}

/// Outcome of a fetch attempt
#[derive(Debug)]
pub enum FetchOutcome {
    /// Media saved to the given path
    Saved(PathBuf),
    /// Fetch failed; the URL is handed back for manual opening
    Fallback(String),
}

/// Media fetcher configuration and HTTP client
pub struct MediaFetcher {
    http_client: reqwest::Client,
    output_dir: PathBuf,
}

impl MediaFetcher {
    /// Create a fetcher writing into the current directory
    pub fn new() -> Self {
        Self {
            http_client: build_client(Duration::from_secs(30)),
            output_dir: PathBuf::from("."),
        }
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http_client = build_client(timeout);
        self
    }

    /// Fetch the sample media for the given metadata record.
    ///
    /// Never escalates a network failure: on any error the resolved URL
    /// is returned as a fallback so the caller can present it directly.
    pub async fn fetch(&self, metadata: &VideoMetadata) -> FetchOutcome {
        let media_url = resolve_media_url(metadata);
        let filename =
            download_filename(&metadata.title, chrono::Utc::now().timestamp());
        let output_path = self.output_dir.join(filename);

        info!("Fetching sample media from {}", media_url);

        match self.stream_to_file(&media_url, &output_path).await {
            Ok(bytes) => {
                info!("Download completed: {} bytes", bytes);
                FetchOutcome::Saved(output_path)
            }
            Err(e) => {
                warn!("Media fetch failed: {}, falling back to direct link", e);
                FetchOutcome::Fallback(media_url)
            }
        }
    }

    /// Stream the response body to a temp file, then rename into place
    async fn stream_to_file(
        &self,
        url: &str,
        output_path: &Path,
    ) -> Result<u64, SaveSoraError> {
        let tmp_path = output_path.with_extension("tmp");
        let mut file = File::create(&tmp_path).await?;

        match self.stream_body(url, &mut file).await {
            Ok(bytes) => {
                file.flush().await?;
                drop(file);
                tokio::fs::rename(&tmp_path, output_path).await?;
                Ok(bytes)
            }
            Err(e) => {
                drop(file);
                let _ = tokio::fs::remove_file(&tmp_path).await;
                Err(e)
            }
        }
    }

    async fn stream_body(&self, url: &str, file: &mut File) -> Result<u64, SaveSoraError> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SaveSoraError::Generic(format!(
                "unexpected status {} for media fetch",
                status
            )));
        }

        let mut stream = response.bytes_stream();
        let mut downloaded = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
        }

        debug!("Streamed {} bytes from {}", downloaded, url);
        Ok(downloaded)
    }
}

impl Default for MediaFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), using default", e);
            reqwest::Client::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(platform: Platform, download_override: Option<String>) -> VideoMetadata {
        VideoMetadata {
            id: "vid_1".to_string(),
            source_url: "https://example.com/v/1".to_string(),
            title: "Test Clip".to_string(),
            thumbnail_url: "https://picsum.photos/id/1/800/600".to_string(),
            duration: "00:45".to_string(),
            size_label: "14.2 MB".to_string(),
            platform,
            download_override,
        }
    }

    #[test]
    fn test_resolve_media_url_priority() {
        let with_override = metadata(
            Platform::Sora,
            Some("https://example.com/custom.mp4".to_string()),
        );
        assert_eq!(
            resolve_media_url(&with_override),
            "https://example.com/custom.mp4"
        );

        let sora = metadata(Platform::Sora, None);
        assert_eq!(resolve_media_url(&sora), TEARS_OF_STEEL_URL);

        for platform in [
            Platform::TikTok,
            Platform::Instagram,
            Platform::YouTube,
            Platform::Twitter,
            Platform::Unknown,
        ] {
            assert_eq!(
                resolve_media_url(&metadata(platform, None)),
                FOR_BIGGER_JOYRIDES_URL
            );
        }
    }

    #[tokio::test]
    async fn test_fetch_saves_streamed_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/sample.mp4")
            .with_status(200)
            .with_header("content-type", "video/mp4")
            .with_body(b"fake mp4 payload".to_vec())
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let fetcher = MediaFetcher::new().with_output_dir(dir.path());
        let meta = metadata(
            Platform::TikTok,
            Some(format!("{}/sample.mp4", server.url())),
        );

        match fetcher.fetch(&meta).await {
            FetchOutcome::Saved(path) => {
                let name = path.file_name().unwrap().to_string_lossy().to_string();
                assert!(name.starts_with("SaveSora_Test_Clip_"));
                assert!(name.ends_with(".mp4"));
                let body = tokio::fs::read(&path).await.unwrap();
                assert_eq!(body, b"fake mp4 payload");
                // No temp file left behind
                assert!(!path.with_extension("tmp").exists());
            }
            FetchOutcome::Fallback(url) => panic!("expected save, got fallback {}", url),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_falls_back_on_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/sample.mp4")
            .with_status(404)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let fetcher = MediaFetcher::new().with_output_dir(dir.path());
        let media_url = format!("{}/sample.mp4", server.url());
        let meta = metadata(Platform::TikTok, Some(media_url.clone()));

        match fetcher.fetch(&meta).await {
            FetchOutcome::Fallback(url) => assert_eq!(url, media_url),
            FetchOutcome::Saved(path) => panic!("expected fallback, got {:?}", path),
        }

        // Nothing written on failure
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_falls_back_when_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MediaFetcher::new()
            .with_output_dir(dir.path())
            .with_timeout(Duration::from_millis(500));
        // Discard port, connection refused
        let meta = metadata(
            Platform::Unknown,
            Some("http://127.0.0.1:9/sample.mp4".to_string()),
        );

        assert!(matches!(
            fetcher.fetch(&meta).await,
            FetchOutcome::Fallback(_)
        ));
    }
}
