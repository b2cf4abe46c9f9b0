//! Domain Entities
//!
//! Core business entities for the catalog domain.

use mongodb::bson::Document;

/// Course entity - a learning unit owned by an external authoring system.
///
/// Courses are read-only from this system's perspective, and their video
/// sub-documents carry arbitrary fields that must pass through unchanged.
/// The entity therefore wraps the raw store document instead of a closed
/// struct, exposing typed accessors for the fields this domain reasons
/// about.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    doc: Document,
}

impl Course {
    /// Wrap a raw store document
    pub fn from_document(doc: Document) -> Self {
        Self { doc }
    }

    /// The course category, if present and a string
    pub fn category(&self) -> Option<&str> {
        self.doc.get_str("category").ok()
    }

    /// The course difficulty, if present and a string
    pub fn difficulty(&self) -> Option<&str> {
        self.doc.get_str("difficulty").ok()
    }

    /// Whether the course is approved for recommendation
    pub fn is_approved(&self) -> bool {
        self.doc.get_bool("isApproved").unwrap_or(false)
    }

    /// Borrow the underlying document
    pub fn as_document(&self) -> &Document {
        &self.doc
    }

    /// Unwrap into the underlying document
    pub fn into_document(self) -> Document {
        self.doc
    }
}
