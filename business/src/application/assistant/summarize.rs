use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::model::Prompt;
use crate::domain::assistant::services::CompletionService;
use crate::domain::assistant::use_cases::summarize::{
    SummarizeConversationParams, SummarizeConversationUseCase,
};
use crate::domain::logger::Logger;

pub struct SummarizeConversationUseCaseImpl {
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SummarizeConversationUseCase for SummarizeConversationUseCaseImpl {
    async fn execute(
        &self,
        params: SummarizeConversationParams,
    ) -> Result<String, AssistantError> {
        self.logger.info(&format!(
            "Summarizing conversation of {} messages",
            params.messages.len()
        ));

        let prompt = Prompt::summarize(&params.messages);

        self.completion.complete(&prompt).await.map_err(|err| {
            self.logger
                .error(&format!("Error in summarize conversation: {err}"));
            AssistantError::SummarizeFailed
        })
    }
}
