//! Domain Value Objects
//!
//! Immutable value types for the catalog domain.

use std::fmt;

/// Subject category a course is filed under.
///
/// The only validation is presence: matching against the store is exact
/// and case-sensitive, so no trimming or case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Difficulty level of a course.
///
/// Callers send free-form strings (beginner/intermediate/advanced in
/// practice); the store is the authority on which values exist, so no
/// fixed level list is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Difficulty(String);

impl Difficulty {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
