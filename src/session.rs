//! Per-request site context read from cookies.
//!
//! The browser keeps two values: the admin bearer token (`admin_token`) and
//! the colour theme (`theme`). Both are read once per request into a
//! [`SiteContext`] that handlers pass down to the pages that need them.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};

pub const TOKEN_COOKIE: &str = "admin_token";
pub const THEME_COOKIE: &str = "theme";

/// One year; the theme preference has no reason to expire sooner
const THEME_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

// =============================================================================
// Theme
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `light` is the default dark theme.
    pub fn from_cookie(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

// =============================================================================
// Auth
// =============================================================================

/// Authentication as far as the browser knows: a token is present or not.
/// The first 401 from the API ends the session (`auth.revalidate` checks it up front).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    token: Option<String>,
}

impl AuthState {
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.is_empty()).then_some(token),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

// =============================================================================
// SiteContext extractor
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteContext {
    pub auth: AuthState,
    pub theme: Theme,
}

impl SiteContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let auth = cookie_value(headers, TOKEN_COOKIE)
            .map(AuthState::with_token)
            .unwrap_or_default();
        let theme = cookie_value(headers, THEME_COOKIE)
            .map(|v| Theme::from_cookie(&v))
            .unwrap_or_default();
        Self { auth, theme }
    }
}

impl<S> FromRequestParts<S> for SiteContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Find a cookie by name across all `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|value| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

// =============================================================================
// Set-Cookie values
// =============================================================================

pub fn token_cookie(token: &str, max_age_secs: u64, secure: bool) -> String {
    format!(
        "{TOKEN_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}{}",
        urlencoding::encode(token),
        secure_flag(secure)
    )
}

pub fn clear_token_cookie(secure: bool) -> String {
    format!(
        "{TOKEN_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{}",
        secure_flag(secure)
    )
}

pub fn theme_cookie(theme: Theme, secure: bool) -> String {
    format!(
        "{THEME_COOKIE}={}; Path=/; SameSite=Lax; Max-Age={THEME_MAX_AGE_SECS}{}",
        theme.as_str(),
        secure_flag(secure)
    )
}

fn secure_flag(secure: bool) -> &'static str {
    if secure {
        "; Secure"
    } else {
        ""
    }
}

/// Same-site path to return to after a form post; anything else goes home.
pub fn safe_return_path(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") =>
        {
            path
        }
        _ => "/",
    }
}
