//! Typed client core for the YAY partner API (`POST {baseUrl}projects`).
//!
//! # Overview
//! Creates photobook projects for a customer from metadata and image URLs.
//! Inputs are validated when value objects are built, so a malformed
//! request never reaches the network. Responses are classified into a typed
//! success (`CreatedProjectResponse`) or a typed error (`ApiError`).
//!
//! # Design
//! - Value objects in `types` are smart constructors; they are immutable and
//!   valid for their whole lifetime.
//! - `PartnerClient` splits the call into `build_create_project` (produces an
//!   `HttpRequest`) and `parse_create_project` (consumes an `HttpResponse`),
//!   with any `Transport` in between (host-does-IO pattern).
//! - `UreqTransport` (feature `ureq`, on by default) is a ready-made blocking
//!   transport. Retries, pooling and cancellation are the transport's job.
//! - Problem bodies are read leniently (`ApiProblem::from_json`); identity
//!   fields of a created project are read strictly.
//!
//! ```no_run
//! use yay_partner_core::{
//!     Address, ApiError, Configuration, CreateProjectRequest, Customer, PartnerClient, Upload,
//! };
//!
//! fn main() -> Result<(), ApiError> {
//!     let client = PartnerClient::new(Configuration::from_env()?);
//!     let address = Address::new("Musterstraße 123", "Apartment 4B", "Berlin", "10115", "DE")?;
//!     let customer = Customer::new("Sarah", "Mueller", "sarah.mueller@gmail.com", address)?;
//!     let upload = Upload::new(
//!         150,
//!         "https://my-photo-app.example.com/images/wedding-cover.jpg",
//!         None,
//!     )?;
//!     let request = CreateProjectRequest::new("Wedding Album", customer, upload, "de_DE")?;
//!
//!     let created = client.create_project(&request)?;
//!     println!("redirect customer to {}", created.result().redirect_url());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;
pub mod validation;
mod wire;

pub use client::PartnerClient;
pub use config::{Configuration, Environment};
pub use error::{ApiError, ConfigError, ProblemKind, ServerError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use response::CreatedProjectResponse;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{Address, ApiProblem, CreateProjectRequest, CreatedProject, Customer, Upload};
pub use validation::ValidationError;
