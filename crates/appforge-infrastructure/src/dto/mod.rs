//! Storage DTOs decoupling on-disk formats from the domain models.

pub mod session;

pub use session::{IdentityDto, SESSION_SCHEMA_VERSION, SessionDto};
