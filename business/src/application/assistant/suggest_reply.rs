use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::model::Prompt;
use crate::domain::assistant::services::CompletionService;
use crate::domain::assistant::use_cases::suggest_reply::{SuggestReplyParams, SuggestReplyUseCase};
use crate::domain::logger::Logger;

pub struct SuggestReplyUseCaseImpl {
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SuggestReplyUseCase for SuggestReplyUseCaseImpl {
    async fn execute(&self, params: SuggestReplyParams) -> Result<String, AssistantError> {
        let prompt = Prompt::suggest_reply(&params.message)?;

        self.logger.info("Generating reply suggestions");

        // The numbered list is returned as raw text.
        self.completion.complete(&prompt).await.map_err(|err| {
            self.logger.error(&format!("Error in suggest reply: {err}"));
            AssistantError::SuggestReplyFailed
        })
    }
}
