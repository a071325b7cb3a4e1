//! Session domain module.
//!
//! This module contains the session model, the repository interface for
//! durable session persistence, and the session lifecycle manager.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`)
//! - `repository`: Repository trait for session persistence
//! - `manager`: Session lifecycle management (`SessionManager`)

mod manager;
mod model;
mod repository;

// Re-export public API
pub use manager::SessionManager;
pub use model::Session;
pub use repository::SessionRepository;
