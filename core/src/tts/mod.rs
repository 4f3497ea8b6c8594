//! Text-to-Speech relay
//!
//! Validates an inbound synthesis request and forwards it to Murf's TTS API
//! over HTTPS, normalizing every provider-side outcome into one
//! `SynthesisResult` shape:
//! - provider returned a usable audio URL → `success = true` with the URL
//! - provider error, timeout, network failure, unparseable body →
//!   `success = false` with an `error`/`message` pair
//!
//! Only a missing API key and invalid request text surface as `Err`; both
//! are raised before any network call is made.
//!
//! Env overrides:
//! - MURF_API_KEY, MURF_API_URL, MURF_TIMEOUT_MS

mod client;
mod types;

pub use client::{extract_audio_url, MurfClient, AUDIO_URL_FIELDS};
pub use types::{SynthesisRequest, SynthesisResult, DEFAULT_VOICE_ID, MAX_TEXT_CHARS};
