//! API DTOs (Data Transfer Objects)

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Request for POST /recommend
///
/// Fields default to empty strings so an absent field takes the same
/// validation path (400) as an explicitly empty one, instead of being
/// rejected by body deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
}

/// Response for POST /recommend
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub recommended_course: Document,
}

/// Response for GET /categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
