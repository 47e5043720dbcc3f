//! Application state wiring all services together.
//!
//! AppState holds the session manager, the CRM client factory, the chat
//! service and the page templates. Handlers only see the core ports; the
//! concrete Pipedrive and OpenAI adapters are chosen in [`AppState::init`].

use std::sync::Arc;
use std::time::Duration;

use minijinja::Environment;

use pipechat_core::auth::box_provider::BoxOAuthProvider;
use pipechat_core::auth::session::SessionManager;
use pipechat_core::chat::service::ChatService;
use pipechat_core::crm::box_provider::BoxCrmProvider;
use pipechat_core::crm::factory::CrmClientFactory;
use pipechat_infra::pipedrive::{PipedriveClient, PipedriveOAuthClient};

use crate::cli::AppConfig;
use crate::http::templates;

/// Shared application state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub crm: CrmClientFactory,
    pub chat: Arc<ChatService>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    /// Build the production state from configuration.
    pub fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let client = pipechat_infra::http_client(Duration::from_secs(config.http_timeout_secs))?;

        let oauth = PipedriveOAuthClient::new(client.clone(), config.oauth());
        let crm = PipedriveClient::new(client);

        let chat_config = config.chat_model();
        let responses = pipechat_infra::llm::create_provider(&chat_config);

        Self::from_providers(
            BoxOAuthProvider::new(oauth),
            BoxCrmProvider::new(crm),
            ChatService::new(responses, chat_config.model, chat_config.store),
        )
    }

    /// Assemble state from already-built providers.
    pub fn from_providers(
        oauth: BoxOAuthProvider,
        crm: BoxCrmProvider,
        chat: ChatService,
    ) -> anyhow::Result<Self> {
        tracing::info!(
            crm = crm.name(),
            model = chat.model(),
            "services initialized"
        );

        Ok(Self {
            sessions: Arc::new(SessionManager::new(oauth)),
            crm: CrmClientFactory::new(crm),
            chat: Arc::new(chat),
            templates: Arc::new(templates::environment()?),
        })
    }
}
