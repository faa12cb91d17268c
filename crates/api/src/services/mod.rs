//! Business logic services.
//!
//! Services validate requests, call into the repositories, and normalize
//! unexpected store failures; they never leak raw database detail to the
//! HTTP layer.

pub mod catalog;
pub mod credentials;
pub mod image;

pub use catalog::{CatalogError, CatalogService};
pub use credentials::{CredentialError, CredentialService};
pub use image::ImagePipelineError;
