//! PipedriveClient -- concrete [`CrmProvider`] for the Pipedrive REST v1 API.
//!
//! Stateless apart from the shared HTTP client: every call carries the
//! session's [`ApiConfig`], so one instance serves all users.

use pipechat_core::crm::provider::CrmProvider;
use pipechat_types::crm::{Deal, DeleteResponse, ListResponse, Person, PersonId};
use pipechat_types::error::CrmError;
use pipechat_types::token::ApiConfig;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub struct PipedriveClient {
    client: reqwest::Client,
}

/// Failure body: `{ "success": false, "error": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl PipedriveClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn url(config: &ApiConfig, path: &str) -> String {
        format!("{}{}", config.base_path.trim_end_matches('/'), path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        config: &ApiConfig,
    ) -> Result<T, CrmError> {
        let response = request
            .bearer_auth(config.access_token.expose_secret())
            .send()
            .await
            .map_err(|e| CrmError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CrmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CrmError::Request(e.to_string()))?;
        parse_envelope(&bytes)
    }
}

/// Decode a 2xx body, rejecting `success: false` envelopes.
fn parse_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CrmError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| CrmError::Deserialization(e.to_string()))?;

    if value.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
        let message = serde_json::from_value::<ErrorBody>(value)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(CrmError::Unsuccessful(message));
    }

    serde_json::from_value(value).map_err(|e| CrmError::Deserialization(e.to_string()))
}

impl CrmProvider for PipedriveClient {
    fn name(&self) -> &str {
        "pipedrive"
    }

    async fn list_persons(&self, config: &ApiConfig) -> Result<ListResponse<Person>, CrmError> {
        let request = self.client.get(Self::url(config, "/persons"));
        let persons: ListResponse<Person> = self.send(request, config).await?;
        tracing::debug!(count = persons.data.len(), "fetched persons");
        Ok(persons)
    }

    async fn delete_person(
        &self,
        config: &ApiConfig,
        id: PersonId,
    ) -> Result<DeleteResponse, CrmError> {
        let request = self.client.delete(Self::url(config, &format!("/persons/{id}")));
        let deleted = self.send(request, config).await?;
        tracing::info!(person_id = id, "deleted person");
        Ok(deleted)
    }

    async fn list_deals(&self, config: &ApiConfig) -> Result<ListResponse<Deal>, CrmError> {
        let request = self.client.get(Self::url(config, "/deals"));
        let deals: ListResponse<Deal> = self.send(request, config).await?;
        tracing::debug!(count = deals.data.len(), "fetched deals");
        Ok(deals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use secrecy::SecretString;
    use serde_json::{json, Value};

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer at-1")
    }

    async fn fake_pipedrive() -> String {
        let router = Router::new()
            .route(
                "/api/v1/persons",
                get(|headers: HeaderMap| async move {
                    if !authorized(&headers) {
                        return Err(StatusCode::UNAUTHORIZED);
                    }
                    Ok(Json(json!({
                        "success": true,
                        "data": [
                            {"id": 1, "name": "Ada", "active_flag": true, "open_deals_count": 2},
                            {"id": 2, "name": "Bob", "active_flag": false}
                        ],
                        "additional_data": {"pagination": {"more_items_in_collection": false}}
                    })))
                }),
            )
            .route(
                "/api/v1/persons/{id}",
                delete(|Path(id): Path<i64>| async move {
                    if id == 404 {
                        return (
                            StatusCode::NOT_FOUND,
                            Json(json!({"success": false, "error": "Person not found"})),
                        );
                    }
                    (StatusCode::OK, Json(json!({"success": true, "data": {"id": id}})))
                }),
            )
            .route(
                "/api/v1/deals",
                get(|| async { Json(json!({"success": true, "data": null})) }),
            );
        testing::serve(router).await
    }

    fn config(base: &str, token: &str) -> ApiConfig {
        ApiConfig {
            access_token: SecretString::from(token.to_string()),
            base_path: format!("{base}/api/v1"),
        }
    }

    #[tokio::test]
    async fn test_list_persons_sends_bearer_token() {
        let base = fake_pipedrive().await;
        let client = PipedriveClient::new(testing::client());

        let persons = client.list_persons(&config(&base, "at-1")).await.unwrap();
        assert!(persons.success);
        assert_eq!(persons.data.len(), 2);
        assert_eq!(persons.data[0].name, "Ada");
        assert!(persons.additional_data.is_some());

        let err = client.list_persons(&config(&base, "wrong")).await.unwrap_err();
        assert!(matches!(err, CrmError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_delete_person() {
        let base = fake_pipedrive().await;
        let client = PipedriveClient::new(testing::client());

        let deleted = client.delete_person(&config(&base, "at-1"), 9).await.unwrap();
        assert_eq!(deleted.data.map(|d| d.id), Some(9));

        let err = client
            .delete_person(&config(&base, "at-1"), 404)
            .await
            .unwrap_err();
        assert!(matches!(err, CrmError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_null_deals_is_empty_list() {
        let base = fake_pipedrive().await;
        let client = PipedriveClient::new(testing::client());

        let deals = client.list_deals(&config(&base, "at-1")).await.unwrap();
        assert!(deals.data.is_empty());
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let body = json!({"success": false, "error": "Scope missing"}).to_string();
        let err = parse_envelope::<ListResponse<Value>>(body.as_bytes()).unwrap_err();
        assert!(matches!(err, CrmError::Unsuccessful(m) if m == "Scope missing"));
    }
}
