use std::sync::Arc;

use poem::Route;

use logger::TracingLogger;
use persistence::db::Database;

use groq::client::GroqClient;
use groq::completion::CompletionServiceGroq;

use business::application::assistant::suggest_reply::SuggestReplyUseCaseImpl;
use business::application::assistant::summarize::SummarizeConversationUseCaseImpl;
use business::application::assistant::translate::TranslateMessageUseCaseImpl;

use crate::api::assistant::routes::AssistantApi;
use crate::api::health::routes::HealthApi;
use crate::config::app_config::AppConfig;

/// Database handle shared with every route group through request data.
pub type SharedDatabase = Option<Arc<Database>>;

/// Route groups owned by the authentication and messaging subsystems,
/// mounted under `/api/auth` and `/api/messages` as-is.
pub struct ExternalRoutes {
    pub auth: Route,
    pub messages: Route,
}

impl Default for ExternalRoutes {
    fn default() -> Self {
        Self {
            auth: Route::new(),
            messages: Route::new(),
        }
    }
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub assistant_api: AssistantApi,
    pub database: SharedDatabase,
    pub external_routes: ExternalRoutes,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let mut groq_client = GroqClient::new(config.groq.api_key.clone())
            .with_api_url(config.groq.api_url.clone())
            .with_model(config.groq.model.clone());
        if let Some(timeout) = config.groq.timeout {
            groq_client = groq_client.with_timeout(timeout)?;
        }
        let completion = Arc::new(CompletionServiceGroq::new(groq_client));

        let database = config
            .database
            .clone()
            .map(|db_config| Arc::new(Database::new(db_config)));

        // Assistant use cases
        let summarize_use_case = Arc::new(SummarizeConversationUseCaseImpl {
            completion: completion.clone(),
            logger: logger.clone(),
        });
        let translate_use_case = Arc::new(TranslateMessageUseCaseImpl {
            completion: completion.clone(),
            logger: logger.clone(),
        });
        let suggest_reply_use_case = Arc::new(SuggestReplyUseCaseImpl {
            completion,
            logger,
        });

        let assistant_api =
            AssistantApi::new(summarize_use_case, translate_use_case, suggest_reply_use_case);

        Ok(Self {
            health_api,
            assistant_api,
            database,
            external_routes: ExternalRoutes::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::config::{
        cors_config::CorsConfig, frontend_config::FrontendConfig, groq_config::GroqConfig,
        server_config::ServerConfig,
    };
    use persistence::db::DatabaseConfig;

    fn config(timeout: Option<Duration>, database: Option<DatabaseConfig>) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            cors: CorsConfig {
                frontend_url: "http://localhost:5173".to_string(),
            },
            groq: GroqConfig {
                api_key: "gsk_test".to_string(),
                api_url: "http://localhost:9999/openai/v1/chat/completions".to_string(),
                model: "llama3-70b-8192".to_string(),
                timeout,
            },
            frontend: FrontendConfig {
                production: false,
                dist_dir: PathBuf::from("../frontend/dist"),
            },
            database,
        }
    }

    #[test]
    fn should_wire_container_with_configured_timeout() {
        let container = DependencyContainer::new(&config(Some(Duration::from_secs(10)), None));

        assert!(container.is_ok());
    }

    #[test]
    fn should_create_database_handle_only_when_configured() {
        let without = DependencyContainer::new(&config(None, None)).unwrap();
        let with = DependencyContainer::new(&config(
            None,
            Some(DatabaseConfig::new("postgres://localhost/chat".to_string())),
        ))
        .unwrap();

        assert!(without.database.is_none());
        assert!(with.database.is_some());
    }
}
