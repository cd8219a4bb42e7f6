//! Kernel of the publisher.
//! Keep this crate lightweight; it wires the domain models to the catalog client.
//!
//! The flow is strictly linear:
//! settings → version derivation → document load → parse → upload → report.
//!
//! ```rust,no_run
//! # async fn demo() {
//! use oaspub_kernel::config::load_settings;
//! use oaspub_kernel::domain::config::{ActionMetadata, CatalogTarget, PublishConfig};
//! use oaspub_kernel::pipeline;
//!
//! let env = load_settings(None::<&str>).unwrap_or_default();
//! let cfg = PublishConfig::new(ActionMetadata::default(), env, CatalogTarget::default());
//!
//! match pipeline::run(&cfg).await {
//!     Ok(receipt) => println!("{receipt}"),
//!     Err(err) => println!("{err}"),
//! }
//! # }
//! ```
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;

pub use crate::error::PipelineError;
pub use oaspub_catalog as catalog;
pub use oaspub_domain as domain;
