use super::{ApiError, PortfolioClient, CONTACT};
use crate::models::{ContactInput, ContactSubmission};

pub struct ContactApi<'a> {
    client: &'a PortfolioClient,
}

impl<'a> ContactApi<'a> {
    pub(super) fn new(client: &'a PortfolioClient) -> Self {
        Self { client }
    }

    /// Requires a valid token. The backend reads it from `?token=`, so it
    /// goes there as well as in the header.
    pub async fn list(&self) -> Result<Vec<ContactSubmission>, ApiError> {
        let url = self.client.with_token_query(self.client.collection(CONTACT)?);
        self.client.get_json(url).await
    }

    /// Public: anyone can leave a message.
    pub async fn submit(&self, input: &ContactInput) -> Result<ContactSubmission, ApiError> {
        self.client
            .post_json(self.client.collection(CONTACT)?, input)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self
            .client
            .with_token_query(self.client.item(CONTACT, Some(id))?);
        self.client.delete_discard(url).await
    }
}
