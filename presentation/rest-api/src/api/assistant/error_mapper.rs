use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::assistant::errors::AssistantError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AssistantError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            AssistantError::MessagesRequired
            | AssistantError::MessageAndTargetLangRequired
            | AssistantError::ReplyMessageRequired => StatusCode::BAD_REQUEST,
            AssistantError::SummarizeFailed
            | AssistantError::TranslateFailed
            | AssistantError::SuggestReplyFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string())))
    }
}
