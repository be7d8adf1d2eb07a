use std::fmt;

use super::ValidationError;

pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

// Binary attachment taken from an admin upload field, forwarded to the
// backend as one multipart part.
#[derive(Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn parse(
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::new(
                "Image file is empty".to_string(),
            ));
        }

        if !ACCEPTED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(ValidationError::new(format!(
                "Unsupported image type: {content_type}"
            )));
        }

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &format!("{} bytes", self.bytes.len()))
            .finish()
    }
}
