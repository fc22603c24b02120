use super::{ApiError, PortfolioClient, AUTH_LOGIN};
use crate::models::{LoginRequest, LoginResponse};

/// `POST /api/auth/login` plus token revalidation.
pub struct AuthApi<'a> {
    client: &'a PortfolioClient,
}

impl<'a> AuthApi<'a> {
    pub(super) fn new(client: &'a PortfolioClient) -> Self {
        Self { client }
    }

    /// Exchange the shared admin password for a bearer token.
    pub async fn login(&self, password: &str) -> Result<String, ApiError> {
        let url = self.client.item(AUTH_LOGIN, None)?;
        let body = LoginRequest {
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post_json(url, &body).await?;
        response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingField("No token received"))
    }

    /// Ask the server whether the bound token is still accepted.
    ///
    /// The API has no dedicated endpoint for this; the contact list is the
    /// cheapest read that requires authentication.
    pub async fn verify(&self) -> Result<(), ApiError> {
        if !self.client.has_bearer() {
            return Err(ApiError::Status {
                status: reqwest::StatusCode::UNAUTHORIZED,
                detail: None,
            });
        }
        self.client.contact().list().await.map(|_| ())
    }
}
