use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::assistant::errors::AssistantError;
use business::domain::assistant::use_cases::suggest_reply::{
    SuggestReplyParams, SuggestReplyUseCase,
};
use business::domain::assistant::use_cases::summarize::{
    SummarizeConversationParams, SummarizeConversationUseCase,
};
use business::domain::assistant::use_cases::translate::{
    TranslateMessageParams, TranslateMessageUseCase,
};

use crate::api::assistant::dto::{
    ReplySuggestionResponse, SuggestReplyRequest, SummarizeRequest, SummaryResponse,
    TranslateRequest, TranslationResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AssistantApi {
    summarize_use_case: Arc<dyn SummarizeConversationUseCase>,
    translate_use_case: Arc<dyn TranslateMessageUseCase>,
    suggest_reply_use_case: Arc<dyn SuggestReplyUseCase>,
}

impl AssistantApi {
    pub fn new(
        summarize_use_case: Arc<dyn SummarizeConversationUseCase>,
        translate_use_case: Arc<dyn TranslateMessageUseCase>,
        suggest_reply_use_case: Arc<dyn SuggestReplyUseCase>,
    ) -> Self {
        Self {
            summarize_use_case,
            translate_use_case,
            suggest_reply_use_case,
        }
    }
}

/// Conversation assistant API
///
/// Thin handlers over the Groq chat-completion proxy. Upstream failures are
/// logged server-side and answered with a generic message.
#[OpenApi(prefix_path = "/groq")]
impl AssistantApi {
    /// Summarize a conversation
    #[oai(path = "/summarize", method = "post", tag = "ApiTags::Assistant")]
    async fn summarize(&self, body: Json<SummarizeRequest>) -> SummarizeResponse {
        let Some(messages) = body.0.messages else {
            let (_, json) = AssistantError::MessagesRequired.into_error_response();
            return SummarizeResponse::BadRequest(json);
        };

        match self
            .summarize_use_case
            .execute(SummarizeConversationParams { messages })
            .await
        {
            Ok(summary) => SummarizeResponse::Ok(Json(SummaryResponse { summary })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SummarizeResponse::BadRequest(json),
                    _ => SummarizeResponse::InternalError(json),
                }
            }
        }
    }

    /// Translate a message
    #[oai(path = "/translate", method = "post", tag = "ApiTags::Assistant")]
    async fn translate(&self, body: Json<TranslateRequest>) -> TranslateResponse {
        let params = TranslateMessageParams {
            message: body.0.message.unwrap_or_default(),
            target_lang: body.0.target_lang.unwrap_or_default(),
        };

        match self.translate_use_case.execute(params).await {
            Ok(translated) => TranslateResponse::Ok(Json(TranslationResponse { translated })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => TranslateResponse::BadRequest(json),
                    _ => TranslateResponse::InternalError(json),
                }
            }
        }
    }

    /// Suggest replies to a message
    ///
    /// Returns three numbered candidate replies as unstructured text.
    #[oai(path = "/suggest-reply", method = "post", tag = "ApiTags::Assistant")]
    async fn suggest_reply(&self, body: Json<SuggestReplyRequest>) -> SuggestReplyResponse {
        let params = SuggestReplyParams {
            message: body.0.message.unwrap_or_default(),
        };

        match self.suggest_reply_use_case.execute(params).await {
            Ok(suggestion) => {
                SuggestReplyResponse::Ok(Json(ReplySuggestionResponse { suggestion }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SuggestReplyResponse::BadRequest(json),
                    _ => SuggestReplyResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "summarize_bad_request")]
pub enum SummarizeResponse {
    #[oai(status = 200)]
    Ok(Json<SummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "translate_bad_request")]
pub enum TranslateResponse {
    #[oai(status = 200)]
    Ok(Json<TranslationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "suggest_reply_bad_request")]
pub enum SuggestReplyResponse {
    #[oai(status = 200)]
    Ok(Json<ReplySuggestionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

// Malformed bodies (wrong JSON shape, non-JSON payloads) get the same 400 as a
// missing field.

fn summarize_bad_request(err: poem::Error) -> SummarizeResponse {
    tracing::warn!(error = %err, "Rejected summarize body");
    let (_, json) = AssistantError::MessagesRequired.into_error_response();
    SummarizeResponse::BadRequest(json)
}

fn translate_bad_request(err: poem::Error) -> TranslateResponse {
    tracing::warn!(error = %err, "Rejected translate body");
    let (_, json) = AssistantError::MessageAndTargetLangRequired.into_error_response();
    TranslateResponse::BadRequest(json)
}

fn suggest_reply_bad_request(err: poem::Error) -> SuggestReplyResponse {
    tracing::warn!(error = %err, "Rejected suggest-reply body");
    let (_, json) = AssistantError::ReplyMessageRequired.into_error_response();
    SuggestReplyResponse::BadRequest(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    mock! {
        pub Summarize {}

        #[async_trait]
        impl SummarizeConversationUseCase for Summarize {
            async fn execute(
                &self,
                params: SummarizeConversationParams,
            ) -> Result<String, AssistantError>;
        }
    }

    mock! {
        pub Translate {}

        #[async_trait]
        impl TranslateMessageUseCase for Translate {
            async fn execute(&self, params: TranslateMessageParams) -> Result<String, AssistantError>;
        }
    }

    mock! {
        pub SuggestReply {}

        #[async_trait]
        impl SuggestReplyUseCase for SuggestReply {
            async fn execute(&self, params: SuggestReplyParams) -> Result<String, AssistantError>;
        }
    }

    fn client(
        summarize: MockSummarize,
        translate: MockTranslate,
        suggest_reply: MockSuggestReply,
    ) -> TestClient<Route> {
        let api = AssistantApi::new(
            Arc::new(summarize),
            Arc::new(translate),
            Arc::new(suggest_reply),
        );
        let service = OpenApiService::new(api, "Assistant", "test");
        TestClient::new(Route::new().nest("/api", service))
    }

    #[tokio::test]
    async fn should_return_summary_for_message_list() {
        let mut summarize = MockSummarize::new();
        summarize
            .expect_execute()
            .withf(|params| params.messages == vec!["hi".to_string(), "hello".to_string()])
            .times(1)
            .returning(|_| Ok("A greeting.".to_string()));
        let cli = client(summarize, MockTranslate::new(), MockSuggestReply::new());

        let resp = cli
            .post("/api/groq/summarize")
            .body_json(&json!({"messages": ["hi", "hello"]}))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"summary": "A greeting."})).await;
    }

    #[tokio::test]
    async fn should_reject_summarize_without_messages() {
        let cli = client(
            MockSummarize::new(),
            MockTranslate::new(),
            MockSuggestReply::new(),
        );

        let resp = cli
            .post("/api/groq/summarize")
            .body_json(&json!({}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({"message": "Messages array is required for summarization"}))
            .await;
    }

    #[tokio::test]
    async fn should_reject_summarize_when_messages_is_not_a_list() {
        let cli = client(
            MockSummarize::new(),
            MockTranslate::new(),
            MockSuggestReply::new(),
        );

        let resp = cli
            .post("/api/groq/summarize")
            .body_json(&json!({"messages": "hi there"}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({"message": "Messages array is required for summarization"}))
            .await;
    }

    #[tokio::test]
    async fn should_pass_camel_case_target_language_to_use_case() {
        let mut translate = MockTranslate::new();
        translate
            .expect_execute()
            .withf(|params| params.message == "Hello" && params.target_lang == "French")
            .times(1)
            .returning(|_| Ok("Bonjour".to_string()));
        let cli = client(MockSummarize::new(), translate, MockSuggestReply::new());

        let resp = cli
            .post("/api/groq/translate")
            .body_json(&json!({"message": "Hello", "targetLang": "French"}))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"translated": "Bonjour"})).await;
    }

    #[tokio::test]
    async fn should_map_translate_validation_error_to_bad_request() {
        let mut translate = MockTranslate::new();
        translate
            .expect_execute()
            .returning(|_| Err(AssistantError::MessageAndTargetLangRequired));
        let cli = client(MockSummarize::new(), translate, MockSuggestReply::new());

        let resp = cli
            .post("/api/groq/translate")
            .body_json(&json!({"message": "Hello"}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({"message": "Message and targetLang are required"}))
            .await;
    }

    #[tokio::test]
    async fn should_return_generic_error_when_suggestion_fails() {
        let mut suggest_reply = MockSuggestReply::new();
        suggest_reply
            .expect_execute()
            .returning(|_| Err(AssistantError::SuggestReplyFailed));
        let cli = client(MockSummarize::new(), MockTranslate::new(), suggest_reply);

        let resp = cli
            .post("/api/groq/suggest-reply")
            .body_json(&json!({"message": "See you tomorrow?"}))
            .send()
            .await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({"message": "Failed to generate reply suggestion"}))
            .await;
    }

    #[tokio::test]
    async fn should_return_raw_suggestion_text() {
        let mut suggest_reply = MockSuggestReply::new();
        suggest_reply
            .expect_execute()
            .returning(|_| Ok("1. Yes\n2. Sure\n3. Absolutely".to_string()));
        let cli = client(MockSummarize::new(), MockTranslate::new(), suggest_reply);

        let resp = cli
            .post("/api/groq/suggest-reply")
            .body_json(&json!({"message": "Coffee?"}))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"suggestion": "1. Yes\n2. Sure\n3. Absolutely"}))
            .await;
    }
}
