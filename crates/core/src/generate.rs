//! Chapter text generation over OpenAI-compatible chat completions.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    error::{ChaptersError, Result},
    format::format_transcript_with_timestamps,
    provider::Provider,
    types::TranscriptSegment,
};

static CHAPTERS_PROMPT: &str = r#"You are an expert at creating concise, well-structured YouTube chapters.

Output rules:
- Output only lines in the form: Start - End Description
- Use M:SS or H:MM:SS time formats (no leading zeros on hours)
- Group related segments into a single chapter where appropriate
- Do not add headings, markdown, or extra commentary
"#;

/// Instructions followed by the timestamped transcript.
pub fn build_chapter_prompt(segments: &[TranscriptSegment]) -> String {
    format!(
        "{}\nTranscript:\n{}\n",
        CHAPTERS_PROMPT,
        format_transcript_with_timestamps(segments)
    )
}

#[async_trait]
pub trait ChapterGenerator: Send + Sync {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String>;
}

pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
    api_url: String,
    model: String,
}

impl ChatCompletionsGenerator {
    pub fn new(provider: &Provider, timeout: Duration) -> Result<Self> {
        let config = provider.config();
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.to_string(),
            model: config.model.to_string(),
        })
    }

    /// Point at a different chat-completions URL (proxies, tests).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChapterGenerator for ChatCompletionsGenerator {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        info!(model = %self.model, prompt_chars = prompt.len(), "requesting chapters");

        let failed = |reason: String| ChaptersError::GenerationFailed { reason };

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt,
                    },
                ],
                "temperature": 0.3,
            }))
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| failed(e.to_string()))?;
        if !status.is_success() {
            debug!(%status, "chapter generation rejected");
            return Err(failed(format!("{status}: {}", body.trim())));
        }

        let response: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| failed(format!("invalid JSON response: {e}")))?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| failed(format!("Invalid API response: {}", response)))?;

        Ok(content.to_string())
    }
}
