//! Server-rendered pages.
//!
//! GET /     - Dashboard: stat cards and the persons list
//! GET /chat - Chat widget

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;
use serde::{Deserialize, Serialize};

use pipechat_core::auth::session::Session;
use pipechat_core::crm::factory::PersonsApi;
use pipechat_core::dashboard::{
    transition_table, DashboardStats, PersonsList, ALERT_PREFIX, UNKNOWN_ERROR,
};
use pipechat_types::crm::Person;

use crate::http::error::AppError;
use crate::http::extractors::session::CurrentSession;
use crate::http::templates;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub level: String,
}

/// One row of the persons list as the template sees it.
#[derive(Debug, Serialize)]
struct PersonRow<'a> {
    id: i64,
    name: &'a str,
    initial: String,
    picture: Option<&'a str>,
    active: bool,
    job_title: Option<&'a str>,
    org_name: Option<&'a str>,
    email: Option<&'a str>,
    phone: Option<&'a str>,
    owner_name: &'a str,
    deals: u64,
    activities: u64,
    add_time: &'a str,
}

impl<'a> From<&'a Person> for PersonRow<'a> {
    fn from(p: &'a Person) -> Self {
        PersonRow {
            id: p.id,
            name: &p.name,
            initial: p.initial(),
            picture: p.picture_id.as_ref().and_then(|pic| pic.url_128()),
            active: p.active_flag,
            job_title: p.job_title.as_deref().filter(|s| !s.is_empty()),
            org_name: p.org_name.as_deref().filter(|s| !s.is_empty()),
            email: p.primary_email.as_deref().filter(|s| !s.is_empty()),
            phone: p.primary_phone(),
            owner_name: &p.owner_name,
            deals: p.deals_count(),
            activities: p.activities_count,
            add_time: &p.add_time,
        }
    }
}

/// Persons for the dashboard. Any failure renders as an empty list.
async fn load_persons(state: &AppState, session: &Session) -> PersonsList {
    let Session::Authenticated { config, .. } = session else {
        return PersonsList::default();
    };

    let api: PersonsApi = state.crm.create(config);
    match api.get_persons().await {
        Ok(persons) => PersonsList::new(persons.data),
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch persons for dashboard");
            PersonsList::default()
        }
    }
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
    session: CurrentSession,
) -> Response {
    let persons = load_persons(&state, &session.0).await;
    let stats = DashboardStats::from_persons(persons.persons());
    let rows: Vec<PersonRow<'_>> = persons.persons().iter().map(PersonRow::from).collect();

    let page = templates::render(
        &state.templates,
        "dashboard.html",
        context! {
            connected => session.0.is_authenticated(),
            site => params.site,
            level => params.level,
            stats => stats,
            persons => rows,
            delete_transitions => transition_table(),
            alert_prefix => ALERT_PREFIX,
            unknown_error => UNKNOWN_ERROR,
        },
    );
    session.respond(page)
}

pub async fn chat(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    templates::render(
        &state.templates,
        "chat.html",
        context! { model => state.chat.model() },
    )
}

/// Unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (axum::http::StatusCode::NOT_FOUND, Html("<h1>404</h1><p>Page not found.</p>"))
}
