pub mod banner;
pub mod dispatch;
pub mod forms;
pub mod pages;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use minijinja::Environment;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use commhub_core::Channel;

use crate::error::ServerError;

use self::banner::Banner;

/// Shared application state passed to all handlers.
///
/// Deliberately small: the dashboard holds no credentials and no dispatch
/// history, only the template environment and a shared HTTP client the
/// REST-based providers borrow per submission.
#[derive(Clone)]
pub struct AppState {
    /// Template environment with the dashboard templates loaded.
    pub templates: Arc<Environment<'static>>,
    /// Shared HTTP client for the REST-based providers.
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the default state with embedded templates.
    pub fn new() -> Result<Self, ServerError> {
        let mut env = Environment::new();
        env.add_template("dashboard.html", include_str!("../../templates/dashboard.html"))?;
        Ok(Self {
            templates: Arc::new(env),
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .map_err(|e| {
                    ServerError::Io(std::io::Error::other(format!(
                        "failed to build HTTP client: {e}"
                    )))
                })?,
        })
    }
}

/// One tab of the dashboard: a dispatch channel or the demo overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A real channel with its own form and provider.
    Channel(Channel),
    /// The feature overview / quick test tab. Never dispatches.
    Demo,
}

impl Mode {
    /// Parse a mode from its query/path identifier.
    pub fn parse(s: &str) -> Result<Self, ServerError> {
        if s == "demo" {
            return Ok(Self::Demo);
        }
        s.parse::<Channel>()
            .map(Self::Channel)
            .map_err(|e| ServerError::UnknownChannel(e.0))
    }

    /// Identifier used in URLs and template conditionals.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Channel(c) => c.as_str(),
            Self::Demo => "demo",
        }
    }

    /// Label shown in the navigation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Channel(c) => c.label(),
            Self::Demo => "All Features Demo",
        }
    }
}

/// Navigation entry rendered in the sidebar.
#[derive(Debug, Serialize)]
struct NavItem {
    id: &'static str,
    label: &'static str,
    active: bool,
}

/// Template context for the dashboard page.
#[derive(Debug, Serialize)]
struct DashboardContext {
    mode: &'static str,
    nav: Vec<NavItem>,
    banner: Option<Banner>,
}

/// Render the dashboard for the given mode, optionally with a result banner.
pub fn render_dashboard(
    state: &AppState,
    mode: Mode,
    banner: Option<Banner>,
) -> Result<axum::response::Html<String>, ServerError> {
    let mut nav: Vec<NavItem> = Channel::ALL
        .into_iter()
        .map(|c| NavItem {
            id: c.as_str(),
            label: c.label(),
            active: mode == Mode::Channel(c),
        })
        .collect();
    nav.push(NavItem {
        id: "demo",
        label: Mode::Demo.label(),
        active: mode == Mode::Demo,
    });

    let ctx = DashboardContext {
        mode: mode.as_str(),
        nav,
        banner,
    };

    let template = state.templates.get_template("dashboard.html")?;
    let html = template.render(minijinja::Value::from_serialize(&ctx))?;
    Ok(axum::response::Html(html))
}

/// Build the Axum router with all dashboard routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::dashboard))
        .route("/health", get(pages::health))
        .route("/dispatch/email", post(dispatch::email))
        .route("/dispatch/sms", post(dispatch::sms))
        .route("/dispatch/call", post(dispatch::call))
        .route("/dispatch/linkedin", post(dispatch::linkedin))
        .route("/dispatch/twitter", post(dispatch::twitter))
        .route("/dispatch/facebook", post(dispatch::facebook))
        .route("/dispatch/instagram", post(dispatch::instagram))
        .route("/dispatch/whatsapp", post(dispatch::whatsapp))
        .route("/demo/test", post(pages::demo_test))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
