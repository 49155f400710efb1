pub mod models;

use common::{Config, PostError, PostResult};
use models::ChatCompletionResponse;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

const GROQ_CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const TEMPERATURE: f64 = 0.4;
const MAX_TOKENS: u32 = 2048;
// Completion calls need more headroom than the GraphQL calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct GroqClient {
    http_client: Client,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(config: &Config) -> PostResult<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PostError::HttpRequest)?;

        Ok(Self {
            http_client,
            api_key: config.groq_api_key.clone(),
            model: config.groq_model.clone(),
        })
    }

    /// Generate the daily post body from the system and user prompts.
    pub async fn generate_post(&self, system_prompt: &str, user_prompt: &str) -> PostResult<String> {
        let body = serde_json::json!({
            "model": self.model,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
        });

        info!("Requesting completion from Groq model {}", self.model);

        let response = self
            .http_client
            .post(GROQ_CHAT_COMPLETIONS_URL)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(PostError::Completion(format!(
                "request failed: {} - {}",
                status, text
            )));
        }

        let payload: ChatCompletionResponse = response.json().await?;
        extract_post_body(payload)
    }
}

/// Pull the first choice's text out of a completion response, rejecting
/// empty choice lists and absent or blank content.
pub fn extract_post_body(response: ChatCompletionResponse) -> PostResult<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| PostError::Completion("response did not contain choices".to_string()))?;

    let content = choice
        .message
        .content
        .ok_or_else(|| PostError::Completion("message content was missing".to_string()))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(PostError::Completion(
            "content was blank after trimming whitespace".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}
