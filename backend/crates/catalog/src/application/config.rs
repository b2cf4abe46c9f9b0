//! Application Configuration
//!
//! Configuration for the catalog application layer.

use std::env;

/// Default database name, matching the store the authoring system writes to
pub const DEFAULT_DATABASE: &str = "test";

/// Default collection name
pub const DEFAULT_COLLECTION: &str = "courses";

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Database holding the course collection
    pub database: String,
    /// Collection the course documents live in
    pub collection: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Build configuration from the environment.
    ///
    /// Reads `MONGO_DB` and `MONGO_COLLECTION`, falling back to the
    /// defaults when unset. The connection URI itself stays in the
    /// binary: it belongs to the client, not to this layer.
    pub fn from_env() -> Self {
        Self {
            database: env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
            collection: env::var("MONGO_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
        }
    }
}
