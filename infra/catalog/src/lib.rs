//! # Catalog
//!
//! Client for the SwaggerHub registry. Publishes a single OpenAPI document per call:
//!
//! * The document is forwarded as-is ([`ApiDocument`] keeps key order and nesting).
//! * Uploads are private and force-overwrite the version on the server side.
//! * Exactly one request is made per [`CatalogClient::publish`]; there are no retries.
//!
//! ## Example
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), oaspub_catalog::CatalogError> {
//! use oaspub_catalog::{ApiDocument, CatalogClient, PublishRequest};
//!
//! let client = CatalogClient::builder().api_key("secret").build()?;
//! let document = ApiDocument::from_slice(br#"{"openapi":"3.0.0"}"#)?;
//!
//! let receipt = client
//!     .publish(&PublishRequest {
//!         domain: "acme",
//!         name: "petstore",
//!         version: "main",
//!         document: &document,
//!     })
//!     .await?;
//! println!("{receipt}");
//! # Ok(())
//! # }
//! ```

mod client;
mod document;
mod error;

pub use crate::client::{
    CatalogClient, CatalogClientBuilder, NoKey, OAS_VERSION, PublishReceipt,
    PublishRequest, WithKey,
};
pub use crate::document::ApiDocument;
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use reqwest::StatusCode;
