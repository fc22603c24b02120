use reqwest::multipart::{Form, Part};

use super::{ApiError, ImageUpload, PortfolioClient, PROJECTS, PROJECTS_UPLOAD};
use crate::models::{Project, ProjectInput, UploadResponse};

pub struct ProjectsApi<'a> {
    client: &'a PortfolioClient,
}

impl<'a> ProjectsApi<'a> {
    pub(super) fn new(client: &'a PortfolioClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get_json(self.client.collection(PROJECTS)?).await
    }

    pub async fn get(&self, id: &str) -> Result<Project, ApiError> {
        self.client
            .get_json(self.client.item(PROJECTS, Some(id))?)
            .await
    }

    pub async fn create(&self, input: &ProjectInput) -> Result<Project, ApiError> {
        self.client
            .post_json(self.client.collection(PROJECTS)?, input)
            .await
    }

    pub async fn update(&self, id: &str, input: &ProjectInput) -> Result<(), ApiError> {
        self.client
            .put_discard(self.client.item(PROJECTS, Some(id))?, input)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete_discard(self.client.item(PROJECTS, Some(id))?)
            .await
    }

    /// Upload an image as multipart field `file`; returns the hosted URL.
    pub async fn upload_image(&self, image: ImageUpload) -> Result<String, ApiError> {
        let url = self.client.item(PROJECTS_UPLOAD, None)?;
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)?;
        let form = Form::new().part("file", part);

        let response: UploadResponse = self
            .client
            .read_json(self.client.http.post(url).multipart(form))
            .await?;
        response
            .into_url()
            .ok_or(ApiError::MissingField("No image URL in response"))
    }
}
