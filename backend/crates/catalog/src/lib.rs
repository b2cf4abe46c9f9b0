//! Course Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Course entity, value objects, normalization, repository traits
//! - `application/` - Use cases (recommend course, list categories)
//! - `infra/` - MongoDB repository implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Read-only model
//! - The course collection is owned by an external authoring system;
//!   this crate never writes to it
//! - Store-native `ObjectId` values never cross the HTTP boundary,
//!   they are rendered as canonical hex strings first
//! - Both operations are stateless and idempotent

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use infra::mongo::MongoCourseRepository;
pub use presentation::router::{catalog_router, catalog_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
