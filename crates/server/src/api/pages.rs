use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use serde::Deserialize;

use super::banner::Banner;
use super::forms::DemoTestForm;
use super::{AppState, Mode, render_dashboard};
use crate::error::ServerError;

/// Query parameters for the dashboard page.
#[derive(Debug, Deserialize, Default)]
pub struct DashboardQuery {
    /// Selected tab; defaults to the email form.
    pub channel: Option<String>,
}

/// `GET /` -- render the dashboard with the selected channel's form.
///
/// Only the selected channel's fields are rendered; an unknown channel name
/// is a 404.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, ServerError> {
    let mode = match query.channel.as_deref() {
        Some(name) => Mode::parse(name)?,
        None => Mode::Channel(commhub_core::Channel::Email),
    };
    render_dashboard(&state, mode, None)
}

/// `GET /health` -- liveness probe.
pub async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /demo/test` -- the demo tab's quick test.
///
/// Renders an informational banner describing what would happen; no provider
/// is constructed and nothing is dispatched.
pub async fn demo_test(
    State(state): State<AppState>,
    Form(form): Form<DemoTestForm>,
) -> Result<Html<String>, ServerError> {
    let message = match form.test_type.as_str() {
        "email" => format!("Email test would be sent to: {}", form.target),
        "sms" => format!("SMS test would be sent to: {}", form.target),
        "call" => format!("Test call would be made to: {}", form.target),
        other => format!("Unknown test type: {other}"),
    };
    render_dashboard(&state, Mode::Demo, Some(Banner::info(message)))
}
