use crate::validation::{is_absolute_url, is_blank, ValidationError};

/// Image source for a project: a cover plus an optional explicit photo list.
///
/// `photo_urls: None` means "not provided" and is omitted from the wire
/// payload. `Some(vec![])` is rejected instead of being treated as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    number_of_images: u32,
    cover_url: String,
    photo_urls: Option<Vec<String>>,
}

impl Upload {
    pub const MAX_IMAGES: u32 = 1000;
    pub const MAX_PHOTO_URLS: usize = 1000;

    pub fn new(
        number_of_images: i64,
        cover_url: impl Into<String>,
        photo_urls: Option<Vec<String>>,
    ) -> Result<Self, ValidationError> {
        let cover_url = cover_url.into();

        let number_of_images = validate_number_of_images(number_of_images)?;
        validate_cover_url(&cover_url)?;
        if let Some(urls) = &photo_urls {
            validate_photo_urls(urls)?;
        }

        Ok(Self {
            number_of_images,
            cover_url,
            photo_urls,
        })
    }

    pub fn number_of_images(&self) -> u32 {
        self.number_of_images
    }

    pub fn cover_url(&self) -> &str {
        &self.cover_url
    }

    pub fn photo_urls(&self) -> Option<&[String]> {
        self.photo_urls.as_deref()
    }
}

fn validate_number_of_images(n: i64) -> Result<u32, ValidationError> {
    if n <= 0 {
        return Err(ValidationError::new(
            "upload.numberOfImages",
            "Number of images must be positive",
        ));
    }
    match u32::try_from(n) {
        Ok(n) if n <= Upload::MAX_IMAGES => Ok(n),
        _ => Err(ValidationError::new(
            "upload.numberOfImages",
            format!("Number of images cannot exceed {}", Upload::MAX_IMAGES),
        )),
    }
}

fn validate_cover_url(url: &str) -> Result<(), ValidationError> {
    if is_blank(url) {
        return Err(ValidationError::new(
            "upload.coverUrl",
            "Cover URL cannot be empty",
        ));
    }
    if !is_absolute_url(url) {
        return Err(ValidationError::new(
            "upload.coverUrl",
            format!("Invalid cover URL: {url}"),
        ));
    }
    Ok(())
}

fn validate_photo_urls(urls: &[String]) -> Result<(), ValidationError> {
    if urls.is_empty() {
        return Err(ValidationError::new(
            "upload.photoUrls",
            "Photo URLs list cannot be empty (use None instead)",
        ));
    }
    if urls.len() > Upload::MAX_PHOTO_URLS {
        return Err(ValidationError::new(
            "upload.photoUrls",
            format!(
                "Cannot provide more than {} photo URLs",
                Upload::MAX_PHOTO_URLS
            ),
        ));
    }
    for (index, url) in urls.iter().enumerate() {
        if is_blank(url) {
            return Err(ValidationError::new(
                "upload.photoUrls",
                format!("Photo URL at index {index} cannot be empty"),
            ));
        }
        if !is_absolute_url(url) {
            return Err(ValidationError::new(
                "upload.photoUrls",
                format!("Invalid photo URL at index {index}: {url}"),
            ));
        }
    }
    Ok(())
}
