//! Portfolio REST API client
//!
//! One `reqwest::Client` is shared by the whole process; each request handler
//! binds it to the caller's bearer token with [`PortfolioClient::with_bearer`].
//! Every outgoing request carries that token when present. Whether an
//! endpoint actually needs it is the backend's business.
//!
//! Calls are grouped per resource, mirroring the REST layout:
//!
//! ```text
//! client.auth()      POST /api/auth/login
//! client.blogs()     /api/blogs/        /api/blogs/{id}
//! client.projects()  /api/projects/     /api/projects/{id}   /api/projects/upload
//! client.about()     /api/about/        /api/about/{id}
//! client.contact()   /api/contact/      /api/contact/{id}
//! ```

mod about;
mod auth;
mod blogs;
mod contact;
pub mod error;
mod projects;
pub mod upload;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;

pub use about::AboutApi;
pub use auth::AuthApi;
pub use blogs::BlogsApi;
pub use contact::ContactApi;
pub use error::ApiError;
pub use projects::ProjectsApi;
pub use upload::{ImageUpload, UploadError, MAX_IMAGE_BYTES};

const AUTH_LOGIN: &str = "/api/auth/login";
const BLOGS: &str = "/api/blogs";
const PROJECTS: &str = "/api/projects";
const PROJECTS_UPLOAD: &str = "/api/projects/upload";
const ABOUT: &str = "/api/about";
const CONTACT: &str = "/api/contact";

#[derive(Clone, Debug)]
pub struct PortfolioClient {
    http: Client,
    /// Base URL without a trailing slash
    base: String,
    collection_trailing_slash: bool,
    bearer: Option<String>,
}

impl PortfolioClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        // Validate early so a typo in the config fails at start-up
        Url::parse(&config.base_url)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base: config.base_url.trim_end_matches('/').to_string(),
            collection_trailing_slash: config.collection_trailing_slash,
            bearer: None,
        })
    }

    /// A handle that signs its requests with `token`. Shares the connection pool.
    pub fn with_bearer(&self, token: Option<&str>) -> Self {
        Self {
            bearer: token.filter(|t| !t.is_empty()).map(String::from),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn has_bearer(&self) -> bool {
        self.bearer.is_some()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn blogs(&self) -> BlogsApi<'_> {
        BlogsApi::new(self)
    }

    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    pub fn about(&self) -> AboutApi<'_> {
        AboutApi::new(self)
    }

    pub fn contact(&self) -> ContactApi<'_> {
        ContactApi::new(self)
    }

    /// Image URL as the browser should load it.
    pub fn resolve_image_url(&self, raw: &str) -> Option<String> {
        resolve_image_url(&self.base, raw)
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    /// Collection endpoint (`/api/blogs` or `/api/blogs/`)
    fn collection(&self, path: &str) -> Result<Url, ApiError> {
        if self.collection_trailing_slash {
            Ok(Url::parse(&format!("{}{}/", self.base, path))?)
        } else {
            Ok(Url::parse(&format!("{}{}", self.base, path))?)
        }
    }

    /// Item or action endpoint (`/api/blogs/{id}`, `/api/auth/login`)
    fn item(&self, path: &str, id: Option<&str>) -> Result<Url, ApiError> {
        let url = match id {
            Some(id) => format!("{}{}/{}", self.base, path, urlencoding::encode(id)),
            None => format!("{}{}", self.base, path),
        };
        Ok(Url::parse(&url)?)
    }

    /// Adds `?token=` for endpoints that read the token from the query
    /// string instead of the `Authorization` header.
    fn with_token_query(&self, mut url: Url) -> Url {
        if let Some(token) = &self.bearer {
            url.query_pairs_mut().append_pair("token", token);
        }
        url
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("API request: {} {}", method, url);

        let response = self.http.execute(request).await.map_err(|e| {
            warn!("API request {} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        debug!("API response: {} {} -> {}", method, url, status);
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status_body(status, &body);
        warn!("API {} {} returned {}: {:?}", method, url, status, err.detail());
        Err(err)
    }

    async fn read_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.read_json(self.http.get(url)).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        self.read_json(self.http.post(url).json(body)).await
    }

    /// PUT whose response body is ignored (the backend answers with a message)
    async fn put_discard<B: Serialize>(&self, url: Url, body: &B) -> Result<(), ApiError> {
        self.send(self.http.put(url).json(body)).await.map(|_| ())
    }

    async fn delete_discard(&self, url: Url) -> Result<(), ApiError> {
        self.send(self.http.delete(url)).await.map(|_| ())
    }
}

/// Absolute `http(s)` URLs pass through; relative paths (`/uploads/x.png`)
/// are served by the API host. Blank means no image.
pub fn resolve_image_url(base: &str, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw.to_string());
    }
    let base = base.trim_end_matches('/');
    if raw.starts_with('/') {
        Some(format!("{base}{raw}"))
    } else {
        Some(format!("{base}/{raw}"))
    }
}
