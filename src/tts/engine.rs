//! Core `Synthesizer` trait and `HttpSynthesizer` implementation.
//!
//! `HttpSynthesizer` POSTs `{"text": …}` as JSON to the configured conversion
//! endpoint and returns the binary response body as an [`AudioClip`].
//! All connection details come from [`EndpointConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::audio::AudioClip;
use crate::config::EndpointConfig;

// ---------------------------------------------------------------------------
// TtsError
// ---------------------------------------------------------------------------

/// Errors that can occur during text-to-speech conversion.
///
/// These variants are distinguished in logs only; the UI collapses every
/// variant into one generic user-facing message.
#[derive(Debug, Clone, Error)]
pub enum TtsError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("TTS request timed out")]
    Timeout,

    /// The endpoint answered with a non-success HTTP status.
    #[error("conversion endpoint returned HTTP {0}")]
    Status(u16),

    /// The endpoint answered 2xx but the body contained no audio bytes.
    #[error("conversion endpoint returned an empty audio payload")]
    EmptyAudio,
}

impl From<reqwest::Error> for TtsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TtsError::Timeout
        } else {
            TtsError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Synthesizer trait
// ---------------------------------------------------------------------------

/// Async trait for text-to-speech backends.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn Synthesizer>`).
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Convert `text` into a playable audio clip.
    ///
    /// `text` is sent exactly as entered; trimming is the caller's concern.
    async fn synthesize(&self, text: &str) -> Result<AudioClip, TtsError>;
}

// Compile-time assertion: Box<dyn Synthesizer> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn Synthesizer>) {}
};

// ---------------------------------------------------------------------------
// HttpSynthesizer
// ---------------------------------------------------------------------------

/// Calls the remote conversion endpoint over HTTP.
///
/// The endpoint contract is deliberately thin: a `POST` with a JSON body
/// `{"text": <input>}`, answered by a 2xx status and a binary audio body.
/// The response content type is captured when present but not validated.
pub struct HttpSynthesizer {
    client: reqwest::Client,
    config: EndpointConfig,
}

impl HttpSynthesizer {
    /// Build an `HttpSynthesizer` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &EndpointConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }
}

/// The JSON payload sent to the conversion endpoint.
pub(crate) fn request_body(text: &str) -> serde_json::Value {
    serde_json::json!({ "text": text })
}

#[async_trait]
impl Synthesizer for HttpSynthesizer {
    /// Send `text` to the configured endpoint and collect the audio bytes.
    ///
    /// The `Authorization: Bearer …` header is attached **only** when
    /// `config.api_key` is `Some(key)` and `key` is non-empty — safe for
    /// endpoints that require no authentication.
    async fn synthesize(&self, text: &str) -> Result<AudioClip, TtsError> {
        let body = request_body(text);

        let mut req = self.client.post(&self.config.url).json(&body);

        // Attach Authorization header only when api_key is a non-empty string.
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(TtsError::EmptyAudio);
        }

        log::debug!(
            "synthesized {} bytes (content type: {})",
            bytes.len(),
            content_type.as_deref().unwrap_or("unknown")
        );

        Ok(AudioClip::new(bytes.to_vec(), content_type))
    }
}

// ---------------------------------------------------------------------------
// MockSynthesizer  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response without any network
/// traffic.
#[cfg(test)]
pub struct MockSynthesizer {
    response: Result<AudioClip, TtsError>,
}

#[cfg(test)]
impl MockSynthesizer {
    /// Create a mock that always returns `Ok` with the given audio bytes.
    pub fn ok(bytes: &[u8]) -> Self {
        Self {
            response: Ok(AudioClip::new(bytes.to_vec(), Some("audio/mpeg".into()))),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: TtsError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<AudioClip, TtsError> {
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(api_key: Option<&str>) -> EndpointConfig {
        EndpointConfig {
            url: "https://tts.example.com/convert".into(),
            api_key: api_key.map(|s| s.to_string()),
            timeout_secs: 10,
        }
    }

    #[test]
    fn from_config_builds_without_panic() {
        let config = make_config(None);
        let _synth = HttpSynthesizer::from_config(&config);
    }

    #[test]
    fn from_config_accepts_empty_api_key() {
        let config = make_config(Some(""));
        let _synth = HttpSynthesizer::from_config(&config);
    }

    #[test]
    fn from_config_accepts_real_api_key() {
        let config = make_config(Some("sk-test-1234"));
        let _synth = HttpSynthesizer::from_config(&config);
    }

    /// Verify that `HttpSynthesizer` is object-safe (usable as
    /// `dyn Synthesizer`).
    #[test]
    fn synthesizer_is_object_safe() {
        let config = make_config(None);
        let synth: Box<dyn Synthesizer> = Box::new(HttpSynthesizer::from_config(&config));
        drop(synth);
    }

    /// The wire payload is exactly `{"text": <input>}`, untrimmed.
    #[test]
    fn request_body_wraps_text_field() {
        let body = request_body("Hello world");
        assert_eq!(body, serde_json::json!({ "text": "Hello world" }));
    }

    #[test]
    fn request_body_preserves_whitespace() {
        let body = request_body("  padded  ");
        assert_eq!(body["text"], "  padded  ");
    }

    // --- MockSynthesizer ---

    #[tokio::test]
    async fn mock_ok_returns_configured_clip() {
        let synth = MockSynthesizer::ok(b"mp3-bytes");
        let clip = synth.synthesize("hi").await.unwrap();
        assert_eq!(clip.bytes(), b"mp3-bytes");
        assert_eq!(clip.content_type(), Some("audio/mpeg"));
    }

    #[tokio::test]
    async fn mock_err_returns_configured_error() {
        let synth = MockSynthesizer::err(TtsError::Status(500));
        let err = synth.synthesize("hi").await.unwrap_err();
        assert!(matches!(err, TtsError::Status(500)));
    }

    // --- TtsError display ---

    #[test]
    fn status_error_display_contains_code() {
        let e = TtsError::Status(503);
        assert!(e.to_string().contains("503"));
    }

    #[test]
    fn empty_audio_error_display() {
        let e = TtsError::EmptyAudio;
        assert!(e.to_string().contains("empty"));
    }
}
