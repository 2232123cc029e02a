use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct SummarizeRequest {
    /// Conversation messages, oldest first
    pub messages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct TranslateRequest {
    /// Message to translate
    pub message: Option<String>,
    /// Target language, e.g. "French"
    pub target_lang: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SuggestReplyRequest {
    /// Message to reply to
    pub message: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Object)]
pub struct TranslationResponse {
    pub translated: String,
}

#[derive(Debug, Clone, Object)]
pub struct ReplySuggestionResponse {
    /// Numbered list of candidate replies, as returned by the model
    pub suggestion: String,
}
