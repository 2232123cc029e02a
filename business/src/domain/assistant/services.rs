use async_trait::async_trait;

use super::errors::CompletionError;
use super::model::Prompt;

/// Service port for the external chat-completion API.
///
/// Returns the content of the first completion choice.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError>;
}
