use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;

#[derive(Debug)]
pub struct SuggestReplyParams {
    pub message: String,
}

#[async_trait]
pub trait SuggestReplyUseCase: Send + Sync {
    async fn execute(&self, params: SuggestReplyParams) -> Result<String, AssistantError>;
}
