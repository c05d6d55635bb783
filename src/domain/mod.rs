//! # Domain Layer
//!
//! The domain layer contains the core business types of the task tracker.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities carry only stored state; wire shapes live in `application::dto`

pub mod entities;

// Re-export commonly used types
pub use entities::*;
