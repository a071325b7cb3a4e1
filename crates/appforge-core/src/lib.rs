//! Core domain layer for AppForge.
//!
//! This crate holds the domain models, repository traits, and lifecycle
//! managers that back the AppForge client: the session (who is logged in),
//! the project collection (what has been generated), and the generation
//! progress state machine. Storage backends live in
//! `appforge-infrastructure`; use-case services live in
//! `appforge-application`.

pub mod error;
pub mod generation;
pub mod identity;
pub mod project;
pub mod session;

// Re-export common error type
pub use error::ForgeError;
