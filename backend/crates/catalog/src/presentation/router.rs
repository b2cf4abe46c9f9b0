//! Catalog Router

use crate::domain::repository::CourseRepository;
use crate::infra::mongo::MongoCourseRepository;
use crate::presentation::handlers::{self, CatalogAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the catalog router with the MongoDB repository
pub fn catalog_router(repo: MongoCourseRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create a generic catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/recommend", post(handlers::recommend_course::<R>))
        .route("/categories", get(handlers::list_categories::<R>))
        .with_state(state)
}
