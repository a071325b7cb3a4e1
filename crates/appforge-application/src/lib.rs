//! Application layer for AppForge.
//!
//! Use-case services over the domain layer: project CRUD with store-owned
//! identity and timestamps, the simulated generation driver, and demo
//! fixture seeding.

pub mod demo;
pub mod generation_driver;
pub mod project_service;

pub use generation_driver::{GenerationDriver, GenerationHandle};
pub use project_service::ProjectService;
