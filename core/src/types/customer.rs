use crate::types::Address;
use crate::validation::{bounded_text, is_e164_phone, is_email, ValidationError};

/// The person the photobook project is created for.
///
/// Email addresses are never normalized: anything containing an upper-case
/// character is rejected so the caller decides how to canonicalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    firstname: String,
    lastname: String,
    email: String,
    address: Address,
    phone: Option<String>,
}

impl Customer {
    pub const MAX_NAME_CHARS: usize = 100;

    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        address: Address,
    ) -> Result<Self, ValidationError> {
        let firstname = firstname.into();
        let lastname = lastname.into();
        let email = email.into();

        bounded_text(
            "customer.firstname",
            "Customer firstname",
            &firstname,
            Self::MAX_NAME_CHARS,
        )?;
        bounded_text(
            "customer.lastname",
            "Customer lastname",
            &lastname,
            Self::MAX_NAME_CHARS,
        )?;
        validate_email(&email)?;

        Ok(Self {
            firstname,
            lastname,
            email,
            address,
            phone: None,
        })
    }

    /// Attaches a phone number in E.164 form (`+` and 7 to 15 digits).
    ///
    /// An empty string is stored as given without format checks.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if !phone.is_empty() && !is_e164_phone(&phone) {
            return Err(ValidationError::new(
                "customer.phone",
                format!("Phone must be in E.164 format (e.g. +4917612345678): {phone}"),
            ));
        }
        self.phone = Some(phone);
        Ok(self)
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !is_email(email) {
        return Err(ValidationError::new(
            "customer.email",
            format!("Invalid email address: {email}"),
        ));
    }
    if email != email.to_lowercase() {
        return Err(ValidationError::new(
            "customer.email",
            format!("Email address must be lowercase: {email}"),
        ));
    }
    Ok(())
}
