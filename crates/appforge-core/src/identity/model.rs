//! Identity domain model.
//!
//! Represents the authenticated account: who the user is, how they are
//! displayed, and what subscription tier they are on.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Account role within the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
    Enterprise,
}

/// Billing status of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Trial,
}

/// Subscription attached to an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Current plan tier
    pub plan: Plan,
    /// Billing status
    pub status: SubscriptionStatus,
    /// Expiry timestamp, if the plan expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// An authenticated account identity.
///
/// This is the "pure" domain model the session layer operates on,
/// independent of how credentials were verified or where the identity
/// is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque account identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Account email address
    pub email: String,
    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Account role
    pub role: Role,
    /// Subscription information
    pub subscription: Subscription,
}

impl Identity {
    /// The fixed demo identity handed out by the static verifier.
    ///
    /// Subscription expiry is set 30 days out from the moment of creation.
    pub fn canonical() -> Self {
        Self {
            id: "user-123".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=john".to_string()),
            role: Role::User,
            subscription: Subscription {
                plan: Plan::Pro,
                status: SubscriptionStatus::Active,
                expires_at: Some(Utc::now() + Duration::days(30)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_identity() {
        let identity = Identity::canonical();
        assert_eq!(identity.id, "user-123");
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.subscription.plan, Plan::Pro);
        assert!(identity.subscription.expires_at.unwrap() > Utc::now());
    }

    #[test]
    fn test_status_rendering() {
        assert_eq!(Plan::Enterprise.to_string(), "enterprise");
        assert_eq!(SubscriptionStatus::Trial.to_string(), "trial");
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
