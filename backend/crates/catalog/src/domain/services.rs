//! Domain Services - Identifier Normalization
//!
//! The store addresses records with native `ObjectId` values; the wire
//! format only ever carries their canonical 24-character hex form. This
//! service rewrites every identifier-bearing field of a course document
//! before it leaves the system boundary.

use mongodb::bson::{Bson, Document};

/// Normalize all store-native identifiers in a course document to their
/// canonical string form.
///
/// Covered fields: the document's own `_id`, every element of
/// `enrolledUsers` and `enrolledTeachers`, and the `_id` of every entry
/// in `videos`. Absent or unexpectedly-shaped fields are skipped, and
/// values that are already strings are left untouched, so the operation
/// is defensive and idempotent. Every other field passes through
/// unchanged, whatever its shape.
pub fn normalize_course(course: &mut Document) {
    normalize_id(course, "_id");
    normalize_id_array(course, "enrolledUsers");
    normalize_id_array(course, "enrolledTeachers");

    if let Some(Bson::Array(videos)) = course.get_mut("videos") {
        for video in videos.iter_mut() {
            if let Bson::Document(video) = video {
                normalize_id(video, "_id");
            }
        }
    }
}

/// Rewrite a single `ObjectId` field to its hex string form.
fn normalize_id(doc: &mut Document, key: &str) {
    if let Some(Bson::ObjectId(oid)) = doc.get(key) {
        let hex = oid.to_hex();
        doc.insert(key, Bson::String(hex));
    }
}

/// Rewrite every `ObjectId` element of an array field to its hex string form.
fn normalize_id_array(doc: &mut Document, key: &str) {
    if let Some(Bson::Array(ids)) = doc.get_mut(key) {
        for id in ids.iter_mut() {
            // ObjectId is Copy, so take it out before overwriting the slot
            if let Bson::ObjectId(oid) = *id {
                *id = Bson::String(oid.to_hex());
            }
        }
    }
}
