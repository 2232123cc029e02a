use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Conversation summaries, translations and reply suggestions
    Assistant,
}
