//! Project image uploads.
//!
//! Files are checked before they leave the process: the backend stores
//! whatever it is given, so type and size limits are enforced here.

use thiserror::Error;

/// Largest image accepted for upload (5 MiB)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum UploadError {
    #[error("Please select a valid image file")]
    NotAnImage,
    #[error("Image size must be less than 5MB")]
    TooLarge,
}

/// An image file received from the admin form, ready to forward.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Validate a received file. A missing or generic content type falls
    /// back to a guess from the file name.
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadError> {
        let file_name = file_name.into();
        let content_type = match content_type {
            Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => ct.to_string(),
            _ => mime_guess::from_path(&file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        };

        if !content_type.starts_with("image/") {
            return Err(UploadError::NotAnImage);
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(UploadError::TooLarge);
        }

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}
