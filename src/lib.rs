//! # Task Manager Library
//!
//! A task tracker backend with:
//! - RESTful HTTP API for users, task statuses, labels and tasks
//! - Bearer JWT authentication
//! - PostgreSQL for persistent storage
//! - OpenAPI documentation, health probes and Prometheus metrics
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities and repository traits
//! - **Application Layer**: Business logic services, DTOs and mapping
//! - **Infrastructure Layer**: Database, metrics and error reporting
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! task_manager/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and repository traits
//! +-- application/    Application services, DTOs and mapping
//! +-- infrastructure/ Database, metrics and error reporting
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
