//! Repository Traits
//!
//! Interfaces for the external course store. Implementation is in the
//! infrastructure layer; tests substitute an in-memory double.

use crate::domain::entities::Course;
use crate::domain::value_objects::{Category, Difficulty};
use crate::error::CatalogResult;

/// Course repository trait - read-only view of the course collection
#[trait_variant::make(CourseRepository: Send)]
pub trait LocalCourseRepository {
    /// Find one approved course matching both category and difficulty.
    ///
    /// Which document wins when several qualify is the store's natural
    /// retrieval order; no ranking is defined.
    async fn find_approved(
        &self,
        category: &Category,
        difficulty: &Difficulty,
    ) -> CatalogResult<Option<Course>>;

    /// Distinct set of `category` values across the whole collection,
    /// regardless of approval status.
    async fn distinct_categories(&self) -> CatalogResult<Vec<String>>;
}
