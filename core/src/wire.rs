//! JSON body of `POST {baseUrl}projects`.
//!
//! # Design
//! Borrowing views over the validated value objects, serialized with serde.
//! Keys are camelCase except `address.postal_code`, which the partner API
//! spells in snake_case. `upload.photoUrls` is left out entirely (not `null`,
//! not `[]`) when the upload has no photo list.

use serde::Serialize;

use crate::types::{Address, CreateProjectRequest, Customer, Upload};

#[derive(Debug, Serialize)]
pub(crate) struct ProjectPayload<'a> {
    title: &'a str,
    customer: CustomerPayload<'a>,
    upload: UploadPayload<'a>,
    locale: &'a str,
}

#[derive(Debug, Serialize)]
struct CustomerPayload<'a> {
    firstname: &'a str,
    lastname: &'a str,
    email: &'a str,
    address: AddressPayload<'a>,
}

#[derive(Debug, Serialize)]
struct AddressPayload<'a> {
    line1: &'a str,
    line2: &'a str,
    city: &'a str,
    postal_code: &'a str,
    country: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadPayload<'a> {
    number_of_images: u32,
    cover_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_urls: Option<&'a [String]>,
}

impl<'a> From<&'a CreateProjectRequest> for ProjectPayload<'a> {
    fn from(request: &'a CreateProjectRequest) -> Self {
        Self {
            title: request.title(),
            customer: CustomerPayload::from(request.customer()),
            upload: UploadPayload::from(request.upload()),
            locale: request.locale(),
        }
    }
}

impl<'a> From<&'a Customer> for CustomerPayload<'a> {
    fn from(customer: &'a Customer) -> Self {
        Self {
            firstname: customer.firstname(),
            lastname: customer.lastname(),
            email: customer.email(),
            address: AddressPayload::from(customer.address()),
        }
    }
}

impl<'a> From<&'a Address> for AddressPayload<'a> {
    fn from(address: &'a Address) -> Self {
        Self {
            line1: address.line1(),
            line2: address.line2(),
            city: address.city(),
            postal_code: address.postal_code(),
            country: address.country(),
        }
    }
}

impl<'a> From<&'a Upload> for UploadPayload<'a> {
    fn from(upload: &'a Upload) -> Self {
        Self {
            number_of_images: upload.number_of_images(),
            cover_url: upload.cover_url(),
            photo_urls: upload.photo_urls(),
        }
    }
}
