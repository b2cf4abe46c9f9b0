//! Infrastructure Layer - Store implementations

pub mod mongo;
