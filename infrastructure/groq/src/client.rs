use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Shared Groq HTTP client configuration.
pub struct GroqClient {
    pub client: Client,
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bounds every request. Without it a hung upstream holds the caller open.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, reqwest::Error> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}
