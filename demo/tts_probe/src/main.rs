//! Probe a running Voxgate relay
//!
//! Run with: cargo run -p tts_probe

use voxgate_core::{SynthesisRequest, SynthesisResult};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("VOXGATE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

    println!("=== Voxgate TTS Relay Probe ===\n");
    println!("Relay: {}", base_url);

    let client = reqwest::Client::new();

    println!("\nChecking /health...");
    match client.get(format!("{}/health", base_url)).send().await {
        Ok(resp) => {
            println!("✅ Health: {}", resp.status());
            let body: serde_json::Value = resp.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(e) if e.is_connect() => {
            println!("❌ Connection error: is the relay running at {}?", base_url);
            println!("Start it with: cargo run -p voxgate-core --bin voxgate-server");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    let request = SynthesisRequest::new(
        "Hello! This is a test of the text-to-speech API. Welcome to our demo!",
    );
    println!("\nRequesting synthesis...");
    println!("Text: {}", request.text);
    println!("Voice: {}", request.voice_id);

    let start = std::time::Instant::now();
    let resp = client
        .post(format!("{}/tts/generate", base_url))
        .json(&request)
        .send()
        .await?;
    println!("Request took: {:?}", start.elapsed());
    println!("Status: {}", resp.status());

    if resp.status().is_success() {
        let result: SynthesisResult = resp.json().await?;
        if result.success {
            println!("✅ {}", result.message);
            if let Some(url) = &result.audio_url {
                println!("🎵 Audio URL: {}", url);
                println!("Open it in a browser to play the audio");
            }
        } else {
            println!("❌ {}", result.message);
            if let Some(error) = &result.error {
                println!("Error: {}", error);
            }
        }
    } else {
        let body: serde_json::Value = resp.json().await?;
        println!("❌ Detail: {}", body["detail"]);
    }

    // Empty text exercises the validation path
    println!("\nRequesting synthesis with empty text (expecting 400)...");
    let resp = client
        .post(format!("{}/tts/generate", base_url))
        .json(&serde_json::json!({ "text": "" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let body: serde_json::Value = resp.json().await?;
    println!("Detail: {}", body["detail"]);

    Ok(())
}
