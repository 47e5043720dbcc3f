//! API client factory.
//!
//! Given a resource-specific client type and an authenticated [`ApiConfig`],
//! produces a ready client. Pure composition: the factory only pairs the
//! shared provider with the session's configuration.

use std::sync::Arc;

use pipechat_types::crm::{Deal, DeleteResponse, ListResponse, Person, PersonId};
use pipechat_types::error::CrmError;
use pipechat_types::token::ApiConfig;

use super::box_provider::BoxCrmProvider;

/// A client bound to one CRM resource.
pub trait ResourceClient: Sized {
    fn bind(provider: Arc<BoxCrmProvider>, config: ApiConfig) -> Self;
}

/// Builds resource clients from the shared provider.
#[derive(Clone)]
pub struct CrmClientFactory {
    provider: Arc<BoxCrmProvider>,
}

impl CrmClientFactory {
    pub fn new(provider: BoxCrmProvider) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    pub fn create<C: ResourceClient>(&self, config: &ApiConfig) -> C {
        C::bind(self.provider.clone(), config.clone())
    }
}

/// Persons resource.
pub struct PersonsApi {
    provider: Arc<BoxCrmProvider>,
    config: ApiConfig,
}

impl ResourceClient for PersonsApi {
    fn bind(provider: Arc<BoxCrmProvider>, config: ApiConfig) -> Self {
        Self { provider, config }
    }
}

impl PersonsApi {
    pub async fn get_persons(&self) -> Result<ListResponse<Person>, CrmError> {
        self.provider.list_persons(&self.config).await
    }

    pub async fn delete_person(&self, id: PersonId) -> Result<DeleteResponse, CrmError> {
        self.provider.delete_person(&self.config, id).await
    }
}

/// Deals resource.
pub struct DealsApi {
    provider: Arc<BoxCrmProvider>,
    config: ApiConfig,
}

impl ResourceClient for DealsApi {
    fn bind(provider: Arc<BoxCrmProvider>, config: ApiConfig) -> Self {
        Self { provider, config }
    }
}

impl DealsApi {
    pub async fn get_deals(&self) -> Result<ListResponse<Deal>, CrmError> {
        self.provider.list_deals(&self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crm::provider::CrmProvider;
    use pipechat_types::crm::DeletedRecord;
    use secrecy::{ExposeSecret, SecretString};
    use std::sync::Mutex;

    /// Records which access token each call was made with.
    #[derive(Default)]
    struct RecordingCrm {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl CrmProvider for RecordingCrm {
        fn name(&self) -> &str {
            "recording"
        }

        async fn list_persons(&self, config: &ApiConfig) -> Result<ListResponse<Person>, CrmError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("persons:{}", config.access_token.expose_secret()));
            Ok(ListResponse::empty())
        }

        async fn delete_person(
            &self,
            config: &ApiConfig,
            id: PersonId,
        ) -> Result<DeleteResponse, CrmError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("delete:{id}:{}", config.access_token.expose_secret()));
            Ok(DeleteResponse {
                success: true,
                data: Some(DeletedRecord { id }),
            })
        }

        async fn list_deals(&self, config: &ApiConfig) -> Result<ListResponse<Deal>, CrmError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("deals:{}", config.base_path));
            Ok(ListResponse::empty())
        }
    }

    fn config(token: &str) -> ApiConfig {
        ApiConfig {
            access_token: SecretString::from(token.to_string()),
            base_path: "https://acme.pipedrive.com/api/v1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_clients_carry_their_session_config() {
        let crm = RecordingCrm::default();
        let calls = crm.calls.clone();
        let factory = CrmClientFactory::new(BoxCrmProvider::new(crm));

        let alice: PersonsApi = factory.create(&config("alice"));
        let bob: PersonsApi = factory.create(&config("bob"));
        alice.get_persons().await.unwrap();
        bob.delete_person(42).await.unwrap();

        let deals: DealsApi = factory.create(&config("alice"));
        deals.get_deals().await.unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                "persons:alice".to_string(),
                "delete:42:bob".to_string(),
                "deals:https://acme.pipedrive.com/api/v1".to_string(),
            ]
        );
    }
}
