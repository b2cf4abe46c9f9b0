//! HTTP Handlers

use crate::application::list_categories::ListCategoriesUseCase;
use crate::application::recommend_course::{RecommendCourseInput, RecommendCourseUseCase};
use crate::domain::repository::CourseRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{CategoriesResponse, RecommendRequest, RecommendResponse};
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /recommend
pub async fn recommend_course<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<RecommendRequest>,
) -> CatalogResult<Json<RecommendResponse>>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    tracing::debug!("Received request for course recommendation");

    let use_case = RecommendCourseUseCase::new(state.repo.clone());

    let input = RecommendCourseInput {
        category: req.category,
        difficulty: req.difficulty,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(RecommendResponse {
        recommended_course: output.course,
    }))
}

/// GET /categories
pub async fn list_categories<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<CategoriesResponse>>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    tracing::debug!("Received request for course categories");

    let use_case = ListCategoriesUseCase::new(state.repo.clone());

    let output = use_case.execute().await?;

    Ok(Json(CategoriesResponse {
        categories: output.categories,
    }))
}
