//! Page templates, embedded at compile time.
//!
//! Names end in `.html` so minijinja auto-escapes interpolated values.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::http::error::AppError;

const BASE: &str = include_str!("../../templates/base.html");
const DASHBOARD: &str = include_str!("../../templates/dashboard.html");
const CHAT: &str = include_str!("../../templates/chat.html");

pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", BASE)?;
    env.add_template("dashboard.html", DASHBOARD)?;
    env.add_template("chat.html", CHAT)?;
    Ok(env)
}

pub fn render<S: Serialize>(
    env: &Environment<'static>,
    name: &str,
    ctx: S,
) -> Result<Html<String>, AppError> {
    env.get_template(name)
        .and_then(|template| template.render(ctx))
        .map(Html)
        .map_err(|e| AppError::Internal(format!("failed to render {name}: {e}")))
}
