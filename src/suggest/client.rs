//! Content suggestion client for the Gemini generateContent API

use crate::core::platform::Platform;
use crate::error::SaveSoraError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Default model for caption generation
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const SYSTEM_INSTRUCTION: &str = "You are a social media expert specializing in viral \
content for TikTok, Instagram Reels, and YouTube Shorts. You create engaging, punchy text.";

/// Structured caption/hashtag suggestions for a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub captions: Vec<String>,
    pub hashtags: Vec<String>,
    pub viral_score: u8,
}

impl SuggestionResult {
    /// Static payload used whenever the service call fails
    pub fn fallback() -> Self {
        Self {
            captions: vec![
                "Check out this amazing video! ✨".to_string(),
                "You won't believe this... 😱".to_string(),
                "Must watch! 🔥".to_string(),
            ],
            hashtags: ["#viral", "#trending", "#fyp", "#video", "#download"]
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            viral_score: 85,
        }
    }

    /// Check the strict shape the prompt asks the service for
    fn is_well_formed(&self) -> bool {
        self.captions.len() == 3
            && self.hashtags.len() == 10
            && (1..=100).contains(&self.viral_score)
    }
}

/// Seam for substituting a fake suggestion service in tests
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Request suggestions for a synthesized title.
    ///
    /// Never fails: any service error degrades to the fallback payload.
    /// Calls are independent; the service is generative, so the same
    /// inputs may legitimately produce different outputs.
    async fn request_suggestions(&self, title: &str, platform: Platform) -> SuggestionResult;
}

/// Gemini API client, explicitly constructed and passed in by the caller
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client with the default model and endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: build_client(Duration::from_secs(30)),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the model name
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Override the service base URL
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http_client = build_client(timeout);
        self
    }

    fn build_prompt(title: &str, platform: Platform) -> String {
        format!(
            "I have a video titled \"{}\" which is intended for {}.\n\n\
             Please generate:\n\
             1. 3 catchy, viral-style captions (mix of short and medium length).\n\
             2. 10 trending, relevant hashtags.\n\
             3. A simulated \"Viral Potential Score\" from 1-100 based on the topic appeal.\n\n\
             Return the response in JSON format.",
            title, platform
        )
    }

    /// Single request, no retries, no caching between invocations
    async fn call_service(
        &self,
        title: &str,
        platform: Platform,
    ) -> Result<SuggestionResult, SaveSoraError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request_body = json!({
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "contents": [{
                "parts": [{ "text": Self::build_prompt(title, platform) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "captions": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "List of viral captions"
                        },
                        "hashtags": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "List of hashtags including the # symbol"
                        },
                        "viralScore": {
                            "type": "INTEGER",
                            "description": "A score from 1 to 100 indicating viral potential"
                        }
                    },
                    "required": ["captions", "hashtags", "viralScore"]
                }
            }
        });

        debug!(model = %self.model, "Sending suggestion request");

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SaveSoraError::SuggestionError(format!(
                "service returned status {}",
                status
            )));
        }

        let envelope: GenerateContentResponse = response.json().await?;
        let text = envelope
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .and_then(|part| part.text.as_deref())
            .ok_or_else(|| {
                SaveSoraError::SuggestionError("no text in service response".to_string())
            })?;

        let result: SuggestionResult = serde_json::from_str(text)?;
        if !result.is_well_formed() {
            return Err(SaveSoraError::SuggestionError(format!(
                "response shape mismatch: {} captions, {} hashtags, score {}",
                result.captions.len(),
                result.hashtags.len(),
                result.viral_score
            )));
        }

        Ok(result)
    }
}

#[async_trait]
impl SuggestionProvider for GeminiClient {
    async fn request_suggestions(&self, title: &str, platform: Platform) -> SuggestionResult {
        match self.call_service(title, platform).await {
            Ok(result) => {
                debug!(viral_score = result.viral_score, "Suggestions received");
                result
            }
            Err(e) => {
                warn!("Suggestion service failed: {}, using fallback", e);
                SuggestionResult::fallback()
            }
        }
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

// generateContent response envelope; only the candidate text is used
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> GeminiClient {
        GeminiClient::new("test-api-key").with_base_url(&server.url())
    }

    fn envelope_with_text(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        })
        .to_string()
    }

    fn well_formed_payload() -> String {
        json!({
            "captions": ["Short one", "A medium length caption here", "Third caption"],
            "hashtags": ["#a", "#b", "#c", "#d", "#e", "#f", "#g", "#h", "#i", "#j"],
            "viralScore": 92
        })
        .to_string()
    }

    #[test]
    fn test_fallback_shape() {
        let fallback = SuggestionResult::fallback();
        assert_eq!(fallback.captions.len(), 3);
        assert_eq!(fallback.hashtags.len(), 5);
        assert_eq!(fallback.viral_score, 85);
        assert!(fallback.hashtags.iter().all(|tag| tag.starts_with('#')));
    }

    #[test]
    fn test_prompt_embeds_title_and_platform() {
        let prompt = GeminiClient::build_prompt("YouTube Short - abc123", Platform::YouTube);
        assert!(prompt.contains("\"YouTube Short - abc123\""));
        assert!(prompt.contains("intended for YouTube"));
    }

    #[tokio::test]
    async fn test_successful_response_parsed() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-2.5-flash:generateContent?key=test-api-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope_with_text(&well_formed_payload()))
            .create_async()
            .await;

        let result = client_for(&server)
            .request_suggestions("Test Video", Platform::TikTok)
            .await;

        assert_eq!(result.captions.len(), 3);
        assert_eq!(result.hashtags.len(), 10);
        assert_eq!(result.viral_score, 92);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_returns_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/v1beta/models/gemini-2.5-flash:generateContent?key=test-api-key",
            )
            .with_status(500)
            .create_async()
            .await;

        let result = client_for(&server)
            .request_suggestions("Test Video", Platform::TikTok)
            .await;

        assert_eq!(result, SuggestionResult::fallback());
    }

    #[tokio::test]
    async fn test_network_failure_returns_fallback() {
        // Nothing listening at this address
        let client = GeminiClient::new("test-api-key")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_millis(500));

        let result = client
            .request_suggestions("Test Video", Platform::Sora)
            .await;

        assert_eq!(result.captions.len(), 3);
        assert_eq!(result.hashtags.len(), 5);
        assert_eq!(result.viral_score, 85);
    }

    #[tokio::test]
    async fn test_unparseable_text_returns_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/v1beta/models/gemini-2.5-flash:generateContent?key=test-api-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope_with_text("not json at all"))
            .create_async()
            .await;

        let result = client_for(&server)
            .request_suggestions("Test Video", Platform::Instagram)
            .await;

        assert_eq!(result, SuggestionResult::fallback());
    }

    #[tokio::test]
    async fn test_wrong_cardinality_returns_fallback() {
        let short_payload = json!({
            "captions": ["only one"],
            "hashtags": ["#a", "#b"],
            "viralScore": 50
        })
        .to_string();

        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/v1beta/models/gemini-2.5-flash:generateContent?key=test-api-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope_with_text(&short_payload))
            .create_async()
            .await;

        let result = client_for(&server)
            .request_suggestions("Test Video", Platform::YouTube)
            .await;

        assert_eq!(result, SuggestionResult::fallback());
    }

    #[tokio::test]
    async fn test_empty_candidates_returns_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/v1beta/models/gemini-2.5-flash:generateContent?key=test-api-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "candidates": [] }).to_string())
            .create_async()
            .await;

        let result = client_for(&server)
            .request_suggestions("Test Video", Platform::Twitter)
            .await;

        assert_eq!(result, SuggestionResult::fallback());
    }
}
