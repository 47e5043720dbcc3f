//! BoxCrmProvider -- object-safe dynamic dispatch wrapper for CrmProvider.
//!
//! Same blanket-impl pattern as `BoxOAuthProvider`.

use std::future::Future;
use std::pin::Pin;

use pipechat_types::crm::{Deal, DeleteResponse, ListResponse, Person, PersonId};
use pipechat_types::error::CrmError;
use pipechat_types::token::ApiConfig;

use super::provider::CrmProvider;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, CrmError>> + Send + 'a>>;

/// Object-safe version of [`CrmProvider`] with boxed futures.
pub trait CrmProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn list_persons_boxed<'a>(
        &'a self,
        config: &'a ApiConfig,
    ) -> BoxFuture<'a, ListResponse<Person>>;

    fn delete_person_boxed<'a>(
        &'a self,
        config: &'a ApiConfig,
        id: PersonId,
    ) -> BoxFuture<'a, DeleteResponse>;

    fn list_deals_boxed<'a>(&'a self, config: &'a ApiConfig) -> BoxFuture<'a, ListResponse<Deal>>;
}

impl<T: CrmProvider> CrmProviderDyn for T {
    fn name(&self) -> &str {
        CrmProvider::name(self)
    }

    fn list_persons_boxed<'a>(
        &'a self,
        config: &'a ApiConfig,
    ) -> BoxFuture<'a, ListResponse<Person>> {
        Box::pin(self.list_persons(config))
    }

    fn delete_person_boxed<'a>(
        &'a self,
        config: &'a ApiConfig,
        id: PersonId,
    ) -> BoxFuture<'a, DeleteResponse> {
        Box::pin(self.delete_person(config, id))
    }

    fn list_deals_boxed<'a>(&'a self, config: &'a ApiConfig) -> BoxFuture<'a, ListResponse<Deal>> {
        Box::pin(self.list_deals(config))
    }
}

/// Type-erased CRM provider, so route logic never names a concrete vendor.
pub struct BoxCrmProvider {
    inner: Box<dyn CrmProviderDyn + Send + Sync>,
}

impl BoxCrmProvider {
    pub fn new<T: CrmProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn list_persons(&self, config: &ApiConfig) -> Result<ListResponse<Person>, CrmError> {
        self.inner.list_persons_boxed(config).await
    }

    pub async fn delete_person(
        &self,
        config: &ApiConfig,
        id: PersonId,
    ) -> Result<DeleteResponse, CrmError> {
        self.inner.delete_person_boxed(config, id).await
    }

    pub async fn list_deals(&self, config: &ApiConfig) -> Result<ListResponse<Deal>, CrmError> {
        self.inner.list_deals_boxed(config).await
    }
}
