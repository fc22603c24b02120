//! HTTP surface: route table, shared state and error mapping.
//!
//! Handlers are split by audience: [`public`] renders the site pages,
//! [`admin`] the password-protected panel. Both read the browser's cookies
//! through the [`SiteContext`](crate::session::SiteContext) extractor and
//! talk to the portfolio API through a per-request [`PortfolioClient`].

pub mod admin;
pub mod public;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{DefaultBodyLimit, Request, State},
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::client::{ApiError, PortfolioClient, MAX_IMAGE_BYTES};
use crate::config::Config;
use crate::session::{clear_token_cookie, SiteContext};

/// The admin panel lives at an unlisted path
pub const ADMIN_ROUTE: &str = "/admin-secret-panel";

/// Room for the text fields and multipart framing around an image
const PROJECT_FORM_LIMIT: usize = MAX_IMAGE_BYTES + 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: PortfolioClient,
    pub config: Arc<Config>,
    started: Instant,
}

impl AppState {
    pub fn new(client: PortfolioClient, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
            started: Instant::now(),
        }
    }

    /// API client bound to the caller's token, if any
    pub fn client_for(&self, ctx: &SiteContext) -> PortfolioClient {
        self.client.with_bearer(ctx.auth.token())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/status", get(status_handler))
        // Public pages
        .route("/", get(public::home_page))
        .route("/riddle", post(public::riddle_answer))
        .route("/hidden", get(public::hidden_page))
        .route("/about", get(public::about_page))
        .route("/contact", post(public::contact_submit))
        .route("/blog", get(public::blog_page))
        .route("/projects", get(public::projects_page))
        .route("/theme", post(public::theme_toggle))
        // Admin panel
        .route("/admin-secret-panel", get(admin::dashboard_page))
        .route("/admin-secret-panel/login", post(admin::login))
        .route("/admin-secret-panel/logout", post(admin::logout))
        .route("/admin-secret-panel/blogs", post(admin::save_blog))
        .route("/admin-secret-panel/blogs/{id}/delete", post(admin::delete_blog))
        .route(
            "/admin-secret-panel/projects",
            post(admin::save_project).layer(DefaultBodyLimit::max(PROJECT_FORM_LIMIT)),
        )
        .route("/admin-secret-panel/projects/{id}/delete", post(admin::delete_project))
        .route("/admin-secret-panel/about", post(admin::save_about))
        .route("/admin-secret-panel/contacts/{id}/delete", post(admin::delete_contact))
        // Middleware
        .layer(middleware::from_fn_with_state(state.clone(), expire_session))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Errors
// =============================================================================

/// Failures that abort a request instead of rendering an inline message.
#[derive(Debug, Error)]
pub enum WebError {
    /// The API rejected the stored token
    #[error("API rejected the admin token")]
    Unauthorized,
}

/// Set on a response whose admin session must end. [`expire_session`]
/// turns it into the clearing cookie, since only the router knows the
/// cookie flags.
#[derive(Clone, Copy, Debug)]
pub struct SessionExpired;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Unauthorized => {
                tracing::info!("Admin token rejected, clearing session");
                (Extension(SessionExpired), Redirect::to(ADMIN_ROUTE)).into_response()
            }
        }
    }
}

/// Clear the token cookie on responses marked [`SessionExpired`].
async fn expire_session(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    if response.extensions_mut().remove::<SessionExpired>().is_some() {
        let cookie = clear_token_cookie(state.config.auth.secure_cookies);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Could not build session cookie: {}", e),
        }
    }
    response
}

/// Split an API result into data plus an inline error message.
///
/// A failed fetch still renders the page with default (empty) data; only a
/// 401 aborts.
pub(crate) fn recover<T: Default>(
    result: Result<T, ApiError>,
) -> Result<(T, Option<String>), WebError> {
    match result {
        Ok(value) => Ok((value, None)),
        Err(e) => Ok((T::default(), Some(inline_message(e)?))),
    }
}

/// Message for a failed write, or abort on 401.
pub(crate) fn inline_message(err: ApiError) -> Result<String, WebError> {
    if err.is_unauthorized() {
        Err(WebError::Unauthorized)
    } else {
        Ok(err.user_message())
    }
}

// =============================================================================
// Status
// =============================================================================

#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub api_base_url: String,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "portfolio-site",
        version: env!("PORTFOLIO_VERSION"),
        git_sha: env!("PORTFOLIO_GIT_SHA"),
        uptime_secs: state.started.elapsed().as_secs(),
        api_base_url: state.client.base_url().to_string(),
    })
}
