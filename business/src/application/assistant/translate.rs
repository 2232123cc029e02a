use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::model::Prompt;
use crate::domain::assistant::services::CompletionService;
use crate::domain::assistant::use_cases::translate::{
    TranslateMessageParams, TranslateMessageUseCase,
};
use crate::domain::logger::Logger;

pub struct TranslateMessageUseCaseImpl {
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl TranslateMessageUseCase for TranslateMessageUseCaseImpl {
    async fn execute(&self, params: TranslateMessageParams) -> Result<String, AssistantError> {
        let prompt = Prompt::translate(&params.message, &params.target_lang)?;

        self.logger.info(&format!(
            "Translating message to: {}",
            params.target_lang
        ));

        self.completion.complete(&prompt).await.map_err(|err| {
            self.logger.error(&format!("Error in translate message: {err}"));
            AssistantError::TranslateFailed
        })
    }
}
