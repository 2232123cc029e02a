use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;

#[derive(Debug)]
pub struct SummarizeConversationParams {
    pub messages: Vec<String>,
}

#[async_trait]
pub trait SummarizeConversationUseCase: Send + Sync {
    async fn execute(&self, params: SummarizeConversationParams)
    -> Result<String, AssistantError>;
}
