/// Errors surfaced by the assistant use cases.
///
/// The display strings are client-visible, so failure variants never carry
/// upstream detail.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AssistantError {
    #[error("Messages array is required for summarization")]
    MessagesRequired,
    #[error("Message and targetLang are required")]
    MessageAndTargetLangRequired,
    #[error("Message is required to suggest a reply")]
    ReplyMessageRequired,
    #[error("Failed to summarize message")]
    SummarizeFailed,
    #[error("Failed to translate message")]
    TranslateFailed,
    #[error("Failed to generate reply suggestion")]
    SuggestReplyFailed,
}

/// Failure of the outbound completion call.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CompletionError {
    #[error("{0}")]
    Upstream(String),
}

impl CompletionError {
    pub fn upstream(message: impl Into<String>) -> Self {
        CompletionError::Upstream(message.into())
    }
}
