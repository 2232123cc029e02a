use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::assistant::errors::CompletionError;
use business::domain::assistant::model::Prompt;
use business::domain::assistant::services::CompletionService;

use crate::client::GroqClient;

const GENERIC_UPSTREAM_ERROR: &str = "Groq API error";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<UpstreamErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

/// Chat-completion adapter over the Groq OpenAI-compatible endpoint.
///
/// Single attempt per prompt: no retry, no backoff.
pub struct CompletionServiceGroq {
    client: GroqClient,
}

impl CompletionServiceGroq {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    fn extract_content(
        status: reqwest::StatusCode,
        body: &str,
    ) -> Result<String, CompletionError> {
        let data: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
            CompletionError::upstream(format!("Groq API returned malformed JSON: {e}"))
        })?;

        if !status.is_success() || data.choices.is_empty() {
            let message = data
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| GENERIC_UPSTREAM_ERROR.to_string());
            return Err(CompletionError::Upstream(message));
        }

        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::upstream(GENERIC_UPSTREAM_ERROR))
    }

    async fn send(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: &self.client.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.as_str(),
            }],
        };

        let response = self
            .client
            .client
            .post(&self.client.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::upstream(format!("Groq API request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::upstream(format!("Groq API body unreadable: {e}")))?;

        tracing::info!(status = status.as_u16(), "Groq API status");
        tracing::info!(body = %text, "Groq API response");

        Self::extract_content(status, &text)
    }
}

#[async_trait]
impl CompletionService for CompletionServiceGroq {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        self.send(prompt).await.inspect_err(|err| {
            tracing::error!(error = %err, "Groq API call failed");
        })
    }
}
