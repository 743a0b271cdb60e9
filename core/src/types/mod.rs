//! Validated value objects for the partner API.
//!
//! # Design
//! Every type here is a smart constructor: `new` either returns a fully
//! valid, immutable value or the first `ValidationError` in field order.
//! There are no setters, so a value that exists is a value that is valid.
//! Nested values are owned outright (`Customer` owns its `Address`,
//! `CreateProjectRequest` owns `Customer` and `Upload`).
//!
//! `ApiProblem` and `CreatedProject` are the only types built from untrusted
//! server data and each has a `from_json` reader for that purpose.

mod address;
mod created;
mod customer;
pub mod problem;
mod project;
mod upload;

pub use address::Address;
pub use created::CreatedProject;
pub use customer::Customer;
pub use problem::ApiProblem;
pub use project::CreateProjectRequest;
pub use upload::Upload;
