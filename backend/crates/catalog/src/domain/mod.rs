//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Course)
//! - Domain value objects (Category, Difficulty)
//! - Domain services (identifier normalization)
//! - Repository traits (interfaces)

pub mod entities;
pub mod services;
pub mod repository;
pub mod value_objects;
