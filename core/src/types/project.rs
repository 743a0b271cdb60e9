use crate::types::{Customer, Upload};
use crate::validation::{is_blank, is_locale, ValidationError};

/// Root aggregate sent to `POST {baseUrl}projects`.
///
/// Holding one means every nested value has already been validated, so a
/// malformed request can never reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    title: String,
    customer: Customer,
    upload: Upload,
    locale: String,
}

impl CreateProjectRequest {
    /// `locale` has the form `de_DE`: two lower-case letters, an underscore,
    /// two upper-case letters.
    pub fn new(
        title: impl Into<String>,
        customer: Customer,
        upload: Upload,
        locale: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let locale = locale.into();

        if is_blank(&title) {
            return Err(ValidationError::new("title", "Project title cannot be empty"));
        }
        if !is_locale(&locale) {
            return Err(ValidationError::new(
                "locale",
                format!("Invalid locale format '{locale}'. Expected format: 'de_DE' or 'en_US'"),
            ));
        }

        Ok(Self {
            title,
            customer,
            upload,
            locale,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn upload(&self) -> &Upload {
        &self.upload
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}
