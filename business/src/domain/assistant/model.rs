use super::errors::AssistantError;

pub const SUMMARIZE_INSTRUCTION: &str = "Summarize this conversation:";
pub const SUGGESTED_REPLY_COUNT: usize = 3;

/// Text sent to the completion endpoint as the single user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Instruction followed by every message on its own line.
    pub fn summarize(messages: &[String]) -> Self {
        Self(format!("{}\n{}", SUMMARIZE_INSTRUCTION, messages.join("\n")))
    }

    pub fn translate(message: &str, target_lang: &str) -> Result<Self, AssistantError> {
        if message.is_empty() || target_lang.is_empty() {
            return Err(AssistantError::MessageAndTargetLangRequired);
        }

        Ok(Self(format!(
            "Translate this message to {}: {}",
            target_lang, message
        )))
    }

    pub fn suggest_reply(message: &str) -> Result<Self, AssistantError> {
        if message.is_empty() {
            return Err(AssistantError::ReplyMessageRequired);
        }

        Ok(Self(format!(
            "Suggest {} helpful and friendly replies to this message.\nReturn them as a numbered list:\n\n\"{}\"",
            SUGGESTED_REPLY_COUNT, message
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
