//! Typed models for the Crowdin REST API v2
//!
//! This crate provides request/response data structures for every Crowdin
//! resource group, together with two conventions applied uniformly:
//!
//! - **Request validation**: mutating requests implement [`Validate`], which
//!   reports the first unmet precondition with a stable, human-readable
//!   message. Absent requests yield [`ValidationError::NilRequest`].
//! - **List options encoding**: list/search options implement
//!   [`ListOptionsProvider`], rendering populated filters as query
//!   parameters and skipping everything unset.
//!
//! [`CrowdinClient`] assembles [`HttpRequest`] values from these types and
//! parses [`HttpResponse`] values; executing the round-trip is left to the
//! caller's HTTP stack.
//!
//! # Example
//!
//! ```rust
//! use crowdin_api_client::model::tasks::{TaskCreateForm, TaskType};
//! use crowdin_api_client::{ClientConfig, CrowdinClient, Validate};
//!
//! let form = TaskCreateForm {
//!     title: "Test task".to_string(),
//!     language_id: "uk".to_string(),
//!     r#type: Some(TaskType::Proofread),
//!     file_ids: vec![1, 2],
//!     ..Default::default()
//! };
//! assert!(form.validate().is_ok());
//!
//! let client = CrowdinClient::with_config(ClientConfig::default()).unwrap();
//! let request = client.build_post("projects/1/tasks", &form).unwrap();
//! assert!(request.url.ends_with("/projects/1/tasks"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
#[allow(missing_docs)]
pub mod model;
pub mod query;
pub mod serde_helpers;
pub mod validate;

pub use client::CrowdinClient;
pub use config::{ClientConfig, Edition};
pub use error::{ApiError, ApiResult, ValidationError, ERR_NIL_REQUEST};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{ListOptions, ListOptionsProvider, Values};
pub use validate::Validate;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::CrowdinClient;
    pub use crate::config::{ClientConfig, Edition};
    pub use crate::error::{ApiError, ApiResult, ValidationError};
    pub use crate::model::{ListResponse, Response, UpdateRequest};
    pub use crate::query::{ListOptions, ListOptionsProvider, Values};
    pub use crate::validate::Validate;
}
