//! In-memory vendors and request helpers for router tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use secrecy::ExposeSecret;
use tower::ServiceExt;

use pipechat_core::auth::box_provider::BoxOAuthProvider;
use pipechat_core::auth::provider::OAuthProvider;
use pipechat_core::chat::box_provider::BoxResponsesProvider;
use pipechat_core::chat::provider::ResponsesProvider;
use pipechat_core::chat::service::ChatService;
use pipechat_core::crm::box_provider::BoxCrmProvider;
use pipechat_core::crm::provider::CrmProvider;
use pipechat_types::chat::{ResponseOutput, ResponseRequest};
use pipechat_types::crm::{Deal, DeleteResponse, DeletedRecord, ListResponse, Person, PersonId};
use pipechat_types::error::{AuthError, CrmError, LlmError};
use pipechat_types::token::{ApiConfig, StoredToken};

use crate::http::cookie;
use crate::http::router::build_router;
use crate::state::AppState;

pub const AUTH_URL: &str = "https://oauth.example.com/oauth/authorize?client_id=test";

fn token(access: &str, expires_at: i64) -> StoredToken {
    StoredToken {
        access_token: access.to_string(),
        refresh_token: "refresh-1".to_string(),
        token_type: "Bearer".to_string(),
        scope: "base".to_string(),
        api_domain: Some("https://acme.pipedrive.com".to_string()),
        expires_in: 3599,
        expires_at: Some(expires_at),
    }
}

fn cookie_pair(token: &StoredToken) -> String {
    let header = cookie::token_cookie(token).unwrap();
    header.to_str().unwrap().split("; ").next().unwrap().to_string()
}

/// `Cookie` header with a token valid for years.
pub fn valid_cookie() -> String {
    cookie_pair(&token("valid-access", 4_102_444_800))
}

pub fn expired_cookie() -> String {
    cookie_pair(&token("stale-access", 0))
}

struct FakeOAuth;

impl OAuthProvider for FakeOAuth {
    fn authorization_url(&self) -> String {
        AUTH_URL.to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<StoredToken, AuthError> {
        match code {
            "good" => Ok(token("exchanged-access", 4_102_444_800)),
            _ => Err(AuthError::Status {
                status: 400,
                body: "invalid_grant".to_string(),
            }),
        }
    }

    async fn refresh(&self, _token: &StoredToken) -> Result<StoredToken, AuthError> {
        let mut fresh = token("refreshed-access", 0);
        fresh.expires_at = None;
        Ok(fresh)
    }
}

#[derive(Clone, Default)]
struct CrmState {
    persons: Arc<Mutex<Vec<Person>>>,
    calls: Arc<AtomicUsize>,
    last_token: Arc<Mutex<Option<String>>>,
    fail: bool,
}

struct FakeCrm(CrmState);

impl FakeCrm {
    fn record(&self, config: &ApiConfig) -> Result<(), CrmError> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        *self.0.last_token.lock().unwrap() = Some(config.access_token.expose_secret().to_string());
        if self.0.fail {
            return Err(CrmError::Status {
                status: 502,
                body: "upstream down".to_string(),
            });
        }
        Ok(())
    }
}

impl CrmProvider for FakeCrm {
    fn name(&self) -> &str {
        "fake-crm"
    }

    async fn list_persons(&self, config: &ApiConfig) -> Result<ListResponse<Person>, CrmError> {
        self.record(config)?;
        Ok(ListResponse {
            success: true,
            data: self.0.persons.lock().unwrap().clone(),
            additional_data: None,
        })
    }

    async fn delete_person(
        &self,
        config: &ApiConfig,
        id: PersonId,
    ) -> Result<DeleteResponse, CrmError> {
        self.record(config)?;
        self.0.persons.lock().unwrap().retain(|p| p.id != id);
        Ok(DeleteResponse {
            success: true,
            data: Some(DeletedRecord { id }),
        })
    }

    async fn list_deals(&self, config: &ApiConfig) -> Result<ListResponse<Deal>, CrmError> {
        self.record(config)?;
        Ok(ListResponse::empty())
    }
}

/// Keeps stored responses so continuation ids can be checked.
#[derive(Default)]
struct FakeResponses {
    stored: Mutex<HashMap<String, String>>,
}

impl ResponsesProvider for FakeResponses {
    fn name(&self) -> &str {
        "fake-llm"
    }

    async fn create_response(&self, request: &ResponseRequest) -> Result<ResponseOutput, LlmError> {
        let mut stored = self.stored.lock().unwrap();
        if let Some(prev) = &request.previous_response_id {
            if !stored.contains_key(prev) {
                return Err(LlmError::Provider {
                    message: format!("HTTP 400: previous response {prev} not found"),
                });
            }
        }
        let id = format!("resp_{}", stored.len() + 1);
        stored.insert(id.clone(), request.input.clone());
        Ok(ResponseOutput {
            id,
            output_text: format!("You said: {}", request.input),
        })
    }
}

fn person(id: i64, name: &str, active: bool, open: u64, closed: u64, activities: u64) -> Person {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "active_flag": active,
        "open_deals_count": open,
        "closed_deals_count": closed,
        "activities_count": activities,
        "owner_name": "Owner",
        "primary_email": format!("{}@example.com", name.to_lowercase()),
    }))
    .unwrap()
}

/// App state over fake vendors, plus handles to inspect them.
pub struct Harness {
    state: AppState,
    crm: CrmState,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(false)
    }

    pub fn failing_crm() -> Self {
        Self::build(true)
    }

    fn build(fail: bool) -> Self {
        let crm = CrmState {
            persons: Arc::new(Mutex::new(vec![
                person(1, "Ada", true, 1, 1, 2),
                person(2, "Bob", true, 2, 0, 3),
                person(3, "Cy", false, 0, 0, 1),
            ])),
            fail,
            ..CrmState::default()
        };

        let state = AppState::from_providers(
            BoxOAuthProvider::new(FakeOAuth),
            BoxCrmProvider::new(FakeCrm(crm.clone())),
            ChatService::new(BoxResponsesProvider::new(FakeResponses::default()), "gpt-4.1", true),
        )
        .unwrap();

        Self { state, crm }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn crm_calls(&self) -> usize {
        self.crm.calls.load(Ordering::SeqCst)
    }

    pub fn last_token(&self) -> Option<String> {
        self.crm.last_token.lock().unwrap().clone()
    }

    pub fn remaining_ids(&self) -> Vec<PersonId> {
        self.crm.persons.lock().unwrap().iter().map(|p| p.id).collect()
    }
}

pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
