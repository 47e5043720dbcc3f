//! CrmProvider trait definition.

use pipechat_types::crm::{Deal, DeleteResponse, ListResponse, Person, PersonId};
use pipechat_types::error::CrmError;
use pipechat_types::token::ApiConfig;

/// Trait for CRM REST backends.
///
/// Every call takes the [`ApiConfig`] of the current session; providers hold
/// no per-user state. Implementations live in pipechat-infra
/// (e.g., `PipedriveClient`).
pub trait CrmProvider: Send + Sync {
    /// Provider name for logs (e.g., "pipedrive").
    fn name(&self) -> &str;

    fn list_persons(
        &self,
        config: &ApiConfig,
    ) -> impl std::future::Future<Output = Result<ListResponse<Person>, CrmError>> + Send;

    fn delete_person(
        &self,
        config: &ApiConfig,
        id: PersonId,
    ) -> impl std::future::Future<Output = Result<DeleteResponse, CrmError>> + Send;

    fn list_deals(
        &self,
        config: &ApiConfig,
    ) -> impl std::future::Future<Output = Result<ListResponse<Deal>, CrmError>> + Send;
}
