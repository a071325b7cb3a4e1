//! Identity domain module.
//!
//! Contains the account identity model and the credential verification
//! capability used by the session layer.
//!
//! # Module Structure
//!
//! - `model`: Identity, role, and subscription types
//! - `verifier`: Credential types and the `CredentialVerifier` trait

mod model;
mod verifier;

// Re-export public API
pub use model::{Identity, Plan, Role, Subscription, SubscriptionStatus};
pub use verifier::{CredentialVerifier, Credentials, StaticCredentialVerifier};
