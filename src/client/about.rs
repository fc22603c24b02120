use super::{ApiError, PortfolioClient, ABOUT};
use crate::models::{AboutInput, AboutSection};

pub struct AboutApi<'a> {
    client: &'a PortfolioClient,
}

impl<'a> AboutApi<'a> {
    pub(super) fn new(client: &'a PortfolioClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<AboutSection>, ApiError> {
        self.client.get_json(self.client.collection(ABOUT)?).await
    }

    /// The about section is a singleton: the first record, if any.
    pub async fn current(&self) -> Result<Option<AboutSection>, ApiError> {
        Ok(self.list().await?.into_iter().next())
    }

    pub async fn create(&self, input: &AboutInput) -> Result<AboutSection, ApiError> {
        self.client
            .post_json(self.client.collection(ABOUT)?, input)
            .await
    }

    pub async fn update(&self, id: &str, input: &AboutInput) -> Result<(), ApiError> {
        self.client
            .put_discard(self.client.item(ABOUT, Some(id))?, input)
            .await
    }
}
