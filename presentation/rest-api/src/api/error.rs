use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Error body returned by the assistant endpoints.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Body of the catch-all 500 response.
#[derive(Serialize, Debug)]
pub struct UncaughtErrorResponse {
    pub error: &'static str,
}

impl Default for UncaughtErrorResponse {
    fn default() -> Self {
        Self {
            error: "Something went wrong!",
        }
    }
}
