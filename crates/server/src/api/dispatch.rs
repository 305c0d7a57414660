//! One dispatch handler per channel.
//!
//! Every handler follows the same shape: build the provider from the
//! submitted credentials, build the dispatch request from the submitted
//! message, run exactly one dispatch, and render the dashboard with the
//! resulting banner. Credentials and message live only for this request.

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use tracing::info;

use commhub_core::{Channel, DispatchRequest};
use commhub_email::{EmailProvider, SmtpConfig};
use commhub_facebook::{FacebookConfig, FacebookProvider};
use commhub_provider::{DynProvider, ProviderError, SimulatedProvider};
use commhub_twilio::{TwilioConfig, TwilioProvider};
use commhub_twitter::{TwitterConfig, TwitterProvider};
use commhub_whatsapp::WhatsAppProvider;

use super::banner::Banner;
use super::forms::{
    CallForm, EmailForm, FacebookForm, InstagramForm, LinkedinForm, SmsForm, TwitterForm,
    WhatsAppForm,
};
use super::{AppState, Mode, render_dashboard};
use crate::error::ServerError;

/// Run one dispatch and collapse the outcome into a banner.
async fn run_dispatch(provider: &dyn DynProvider, request: DispatchRequest) -> Banner {
    info!(
        provider = provider.name(),
        request_id = %request.id,
        channel = %request.channel,
        "dispatching"
    );
    match provider.dispatch(&request).await {
        Ok(receipt) => Banner::from_receipt(&receipt),
        Err(e) => Banner::from_error(&e),
    }
}

/// Render the dashboard for a provider that failed to construct.
fn construction_failed(
    state: &AppState,
    mode: Mode,
    error: &ProviderError,
) -> Result<Html<String>, ServerError> {
    render_dashboard(state, mode, Some(Banner::from_error(error)))
}

/// `POST /dispatch/email`
pub async fn email(
    State(state): State<AppState>,
    Form(form): Form<EmailForm>,
) -> Result<Html<String>, ServerError> {
    let mode = Mode::Channel(Channel::Email);

    let config = SmtpConfig::new(form.smtp_server)
        .with_port(form.smtp_port)
        .with_credentials(form.sender_email.clone(), form.sender_password);

    let provider = match EmailProvider::new(config) {
        Ok(p) => p,
        Err(e) => return construction_failed(&state, mode, &e),
    };

    let request = DispatchRequest::new(
        Channel::Email,
        serde_json::json!({
            "from": form.sender_email,
            "to": form.recipient_email,
            "subject": form.subject,
            "body": form.message,
        }),
    );

    let banner = run_dispatch(&provider, request).await;
    render_dashboard(&state, mode, Some(banner))
}

/// `POST /dispatch/sms`
pub async fn sms(
    State(state): State<AppState>,
    Form(form): Form<SmsForm>,
) -> Result<Html<String>, ServerError> {
    let provider = TwilioProvider::with_client(
        TwilioConfig::new(form.account_sid, form.auth_token),
        state.http.clone(),
    );

    let request = DispatchRequest::new(
        Channel::Sms,
        serde_json::json!({
            "to": form.to_number,
            "from": form.from_number,
            "body": form.message,
        }),
    );

    let banner = run_dispatch(&provider, request).await;
    render_dashboard(&state, Mode::Channel(Channel::Sms), Some(banner))
}

/// `POST /dispatch/call`
pub async fn call(
    State(state): State<AppState>,
    Form(form): Form<CallForm>,
) -> Result<Html<String>, ServerError> {
    let provider = TwilioProvider::with_client(
        TwilioConfig::new(form.account_sid, form.auth_token),
        state.http.clone(),
    );

    let request = DispatchRequest::new(
        Channel::Call,
        serde_json::json!({
            "to": form.to_number,
            "from": form.from_number,
            "twiml_url": form.twiml_url,
        }),
    );

    let banner = run_dispatch(&provider, request).await;
    render_dashboard(&state, Mode::Channel(Channel::Call), Some(banner))
}

/// `POST /dispatch/linkedin` -- simulated, no network I/O.
pub async fn linkedin(
    State(state): State<AppState>,
    Form(form): Form<LinkedinForm>,
) -> Result<Html<String>, ServerError> {
    let provider = SimulatedProvider::new(
        "linkedin",
        "LinkedIn posting requires OAuth 2.0 app review. Post would be published to LinkedIn!",
    );

    let request = DispatchRequest::new(
        Channel::Linkedin,
        serde_json::json!({ "content": form.content }),
    );

    let banner = run_dispatch(&provider, request).await;
    render_dashboard(&state, Mode::Channel(Channel::Linkedin), Some(banner))
}

/// `POST /dispatch/twitter`
pub async fn twitter(
    State(state): State<AppState>,
    Form(form): Form<TwitterForm>,
) -> Result<Html<String>, ServerError> {
    let provider = TwitterProvider::with_client(
        TwitterConfig::new(
            form.consumer_key,
            form.consumer_secret,
            form.access_token,
            form.access_token_secret,
        ),
        state.http.clone(),
    );

    let request = DispatchRequest::new(
        Channel::Twitter,
        serde_json::json!({ "text": form.tweet }),
    );

    let banner = run_dispatch(&provider, request).await;
    render_dashboard(&state, Mode::Channel(Channel::Twitter), Some(banner))
}

/// `POST /dispatch/facebook`
pub async fn facebook(
    State(state): State<AppState>,
    Form(form): Form<FacebookForm>,
) -> Result<Html<String>, ServerError> {
    let mut config = FacebookConfig::new(form.access_token);
    if !form.page_id.trim().is_empty() {
        config = config.with_page_id(form.page_id.trim());
    }
    let provider = FacebookProvider::with_client(config, state.http.clone());

    let request = DispatchRequest::new(
        Channel::Facebook,
        serde_json::json!({ "message": form.message }),
    );

    let banner = run_dispatch(&provider, request).await;
    render_dashboard(&state, Mode::Channel(Channel::Facebook), Some(banner))
}

/// `POST /dispatch/instagram` -- simulated, no network I/O; the uploaded
/// image is accepted but never leaves the process.
pub async fn instagram(
    State(state): State<AppState>,
    Form(form): Form<InstagramForm>,
) -> Result<Html<String>, ServerError> {
    let provider = SimulatedProvider::new(
        "instagram",
        "Instagram posting requires careful handling of their API policies. Image would be posted to Instagram!",
    );

    let request = DispatchRequest::new(
        Channel::Instagram,
        serde_json::json!({
            "caption": form.caption,
            "image": form.image,
        }),
    );

    let banner = run_dispatch(&provider, request).await;
    render_dashboard(&state, Mode::Channel(Channel::Instagram), Some(banner))
}

/// `POST /dispatch/whatsapp`
pub async fn whatsapp(
    State(state): State<AppState>,
    Form(form): Form<WhatsAppForm>,
) -> Result<Html<String>, ServerError> {
    let provider = WhatsAppProvider::new();

    let request = DispatchRequest::new(
        Channel::Whatsapp,
        serde_json::json!({
            "phone": form.phone_number,
            "message": form.message,
            "hour": form.hour,
            "minute": form.minute,
        }),
    );

    let banner = run_dispatch(&provider, request).await;
    render_dashboard(&state, Mode::Channel(Channel::Whatsapp), Some(banner))
}
