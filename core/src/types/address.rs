use crate::validation::{bounded_text, is_blank, is_country_code, ValidationError};

/// Postal address of a customer.
///
/// `line2` may be blank and `postal_code` is free text; neither is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    line1: String,
    line2: String,
    city: String,
    postal_code: String,
    country: String,
}

impl Address {
    pub const MAX_CITY_CHARS: usize = 100;

    /// `country` must be an ISO 3166-1 alpha-2 code in upper case. Only the
    /// shape is checked, so unassigned codes such as `ZZ` are accepted.
    pub fn new(
        line1: impl Into<String>,
        line2: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let line1 = line1.into();
        let line2 = line2.into();
        let city = city.into();
        let postal_code = postal_code.into();
        let country = country.into();

        if is_blank(&line1) {
            return Err(ValidationError::new(
                "address.line1",
                "Address line1 cannot be empty",
            ));
        }
        bounded_text("address.city", "City", &city, Self::MAX_CITY_CHARS)?;
        if !is_country_code(&country) {
            return Err(ValidationError::new(
                "address.country",
                format!(
                    "Invalid country code '{country}'. Must be ISO 3166-1 alpha-2 format (e.g., 'DE', 'US')"
                ),
            ));
        }

        Ok(Self {
            line1,
            line2,
            city,
            postal_code,
            country,
        })
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> &str {
        &self.line2
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}
