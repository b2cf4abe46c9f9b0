//! Recommend Course Use Case

use crate::domain::repository::CourseRepository;
use crate::domain::services::normalize_course;
use crate::domain::value_objects::{Category, Difficulty};
use crate::error::{CatalogError, CatalogResult};
use mongodb::bson::Document;
use std::sync::Arc;

/// Input DTO for recommend course
#[derive(Debug, Clone)]
pub struct RecommendCourseInput {
    pub category: String,
    pub difficulty: String,
}

/// Output DTO for recommend course
#[derive(Debug, Clone)]
pub struct RecommendCourseOutput {
    /// The recommended course, identifiers already in wire-safe form
    pub course: Document,
}

/// Recommend Course Use Case
pub struct RecommendCourseUseCase<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> RecommendCourseUseCase<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RecommendCourseInput) -> CatalogResult<RecommendCourseOutput> {
        // Validate before touching the store: a rejected request must not
        // issue a query
        let (Some(category), Some(difficulty)) = (
            Category::new(input.category),
            Difficulty::new(input.difficulty),
        ) else {
            return Err(CatalogError::MissingFields);
        };

        tracing::debug!(
            category = %category,
            difficulty = %difficulty,
            "Looking up recommended course"
        );

        let course = self.repo.find_approved(&category, &difficulty).await?;

        let Some(course) = course else {
            tracing::info!(
                category = %category,
                difficulty = %difficulty,
                "No recommended course found"
            );
            return Err(CatalogError::CourseNotFound);
        };

        let mut doc = course.into_document();
        normalize_course(&mut doc);

        tracing::debug!(course_id = ?doc.get("_id"), "Recommended course found");

        Ok(RecommendCourseOutput { course: doc })
    }
}
