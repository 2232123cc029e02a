use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;

#[derive(Debug)]
pub struct TranslateMessageParams {
    pub message: String,
    pub target_lang: String,
}

#[async_trait]
pub trait TranslateMessageUseCase: Send + Sync {
    async fn execute(&self, params: TranslateMessageParams) -> Result<String, AssistantError>;
}
