//! Murf provider client.

use crate::config::MurfConfig;
use crate::tts::types::{SynthesisRequest, SynthesisResult};
use crate::{Result, VoxgateError};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Response fields probed for the generated audio URL, in order. Murf's
/// response schema is not pinned down; first present non-empty string wins.
pub const AUDIO_URL_FIELDS: [&str; 3] = ["audio_url", "url", "download_url"];

/// Client for Murf's synthesis endpoint
pub struct MurfClient {
    config: MurfConfig,
    http_client: reqwest::Client,
}

impl MurfClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(MurfConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: MurfConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(&config.user_agent)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            config,
            http_client,
        }
    }

    /// Relay one synthesis request to Murf
    ///
    /// Contract:
    /// - Input: a validated-on-entry `SynthesisRequest`
    /// - Output: `SynthesisResult`; provider and transport failures come
    ///   back as `success = false`, never as `Err`
    /// - Error: missing API key or invalid text, both raised before the
    ///   network call
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                VoxgateError::ConfigurationError(
                    "MURF_API_KEY environment variable not set. Please set your Murf API key."
                        .to_string(),
                )
            })?;
        request.validate()?;

        let payload = json!({
            "text": request.text,
            "voice_id": request.voice_id,
            "speed": request.speed,
            "pitch": request.pitch,
        });

        debug!(
            target: "tts",
            chars = request.text.chars().count(),
            voice_id = %request.voice_id,
            "Relaying synthesis request to Murf"
        );

        let response = match self
            .http_client
            .post(&self.config.api_endpoint)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(target: "tts", error = %e, "Murf API request timed out");
                return Ok(SynthesisResult::failure(
                    "Request timeout",
                    "Request to Murf API timed out",
                ));
            }
            Err(e) => {
                warn!(target: "tts", error = %e, "Murf API request failed");
                return Ok(SynthesisResult::failure(
                    e.to_string(),
                    "Network error occurred while calling Murf API",
                ));
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            // The total timeout also covers the body read, so a late stall
            // still resolves to the timeout result
            let body: serde_json::Value = match response.json().await {
                Ok(body) => body,
                Err(e) if e.is_timeout() => {
                    warn!(target: "tts", error = %e, "Murf API response timed out");
                    return Ok(SynthesisResult::failure(
                        "Request timeout",
                        "Request to Murf API timed out",
                    ));
                }
                Err(e) => {
                    warn!(target: "tts", error = %e, "Failed to parse Murf response");
                    return Ok(SynthesisResult::failure(
                        e.to_string(),
                        "Unexpected error occurred",
                    ));
                }
            };

            match extract_audio_url(&body) {
                Some(url) => {
                    debug!(target: "tts", audio_url = %url, "Murf returned audio URL");
                    Ok(SynthesisResult::complete(url))
                }
                None => {
                    warn!(target: "tts", "No audio URL found in Murf response");
                    Ok(SynthesisResult::failure(
                        "No audio URL found in response",
                        "Failed to extract audio URL from Murf response",
                    ))
                }
            }
        } else {
            let error_detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|e| e.as_str())
                        .map(|e| e.to_string())
                })
                .unwrap_or_else(|| format!("Murf API error: {}", status.as_u16()));

            warn!(target: "tts", status = %status, error = %error_detail, "Murf API returned error");
            Ok(SynthesisResult::failure(
                error_detail,
                format!("Failed to generate audio. Status: {}", status.as_u16()),
            ))
        }
    }
}

impl Default for MurfClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the audio URL out of a provider response body, probing
/// `AUDIO_URL_FIELDS` in order
pub fn extract_audio_url(body: &serde_json::Value) -> Option<String> {
    AUDIO_URL_FIELDS.iter().find_map(|field| {
        body.get(field)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    })
}
