//! MongoDB Repository Implementation

use crate::application::config::CatalogConfig;
use crate::domain::entities::Course;
use crate::domain::repository::CourseRepository;
use crate::domain::value_objects::{Category, Difficulty};
use crate::error::CatalogResult;
use mongodb::Client;
use mongodb::Collection;
use mongodb::bson::{Bson, Document, doc};

/// MongoDB-backed course repository.
///
/// `Collection` is a cheap clonable handle over the shared client, so one
/// repository value serves any number of concurrent in-flight requests.
#[derive(Clone)]
pub struct MongoCourseRepository {
    collection: Collection<Document>,
}

impl MongoCourseRepository {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    /// Resolve the collection handle from a connected client and config.
    pub fn from_client(client: &Client, config: &CatalogConfig) -> Self {
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);
        Self::new(collection)
    }
}

impl CourseRepository for MongoCourseRepository {
    async fn find_approved(
        &self,
        category: &Category,
        difficulty: &Difficulty,
    ) -> CatalogResult<Option<Course>> {
        let filter = doc! {
            "category": category.as_str(),
            "difficulty": difficulty.as_str(),
            "isApproved": true,
        };

        let doc = self.collection.find_one(filter).await?;

        Ok(doc.map(Course::from_document))
    }

    async fn distinct_categories(&self) -> CatalogResult<Vec<String>> {
        let values = self.collection.distinct("category", doc! {}).await?;

        // Documents where `category` was stored as something other than a
        // string are skipped rather than failing the whole read
        let categories = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(category) => Some(category),
                _ => None,
            })
            .collect();

        Ok(categories)
    }
}
