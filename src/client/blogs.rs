use super::{ApiError, PortfolioClient, BLOGS};
use crate::models::{BlogInput, BlogPost};

pub struct BlogsApi<'a> {
    client: &'a PortfolioClient,
}

impl<'a> BlogsApi<'a> {
    pub(super) fn new(client: &'a PortfolioClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.client.get_json(self.client.collection(BLOGS)?).await
    }

    pub async fn get(&self, id: &str) -> Result<BlogPost, ApiError> {
        self.client.get_json(self.client.item(BLOGS, Some(id))?).await
    }

    pub async fn create(&self, input: &BlogInput) -> Result<BlogPost, ApiError> {
        self.client
            .post_json(self.client.collection(BLOGS)?, input)
            .await
    }

    pub async fn update(&self, id: &str, input: &BlogInput) -> Result<(), ApiError> {
        self.client
            .put_discard(self.client.item(BLOGS, Some(id))?, input)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete_discard(self.client.item(BLOGS, Some(id))?)
            .await
    }
}
