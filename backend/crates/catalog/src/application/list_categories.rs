//! List Categories Use Case

use crate::domain::repository::CourseRepository;
use crate::error::{CatalogError, CatalogResult};
use std::sync::Arc;

/// Output DTO for list categories
#[derive(Debug, Clone)]
pub struct ListCategoriesOutput {
    pub categories: Vec<String>,
}

/// List Categories Use Case
pub struct ListCategoriesUseCase<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> ListCategoriesUseCase<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CatalogResult<ListCategoriesOutput> {
        // The store's distinct read already deduplicates; no second pass
        let mut categories = self.repo.distinct_categories().await?;

        if categories.is_empty() {
            tracing::info!("No categories found");
            return Err(CatalogError::NoCategories);
        }

        // The contract leaves ordering unspecified; sort so responses are
        // deterministic across calls
        categories.sort();

        tracing::debug!(count = categories.len(), "Categories found");

        Ok(ListCategoriesOutput { categories })
    }
}
