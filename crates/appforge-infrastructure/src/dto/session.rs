//! Versioned storage DTO for the session payload.
//!
//! The on-disk format is decoupled from the domain model so the stored file
//! can evolve independently. Timestamps are stored as RFC 3339 strings; the
//! `schema_version` field tags the layout for future migrations.

use appforge_core::error::{ForgeError, Result};
use appforge_core::identity::{Identity, Plan, Role, SubscriptionStatus};
use appforge_core::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current on-disk schema version.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Serialized form of [`Session`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDto {
    /// On-disk layout version
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub identity: IdentityDto,
    /// RFC 3339 timestamp
    pub established_at: String,
}

fn default_schema_version() -> u32 {
    SESSION_SCHEMA_VERSION
}

/// Serialized form of [`Identity`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityDto {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub plan: Plan,
    pub subscription_status: SubscriptionStatus,
    /// RFC 3339 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl From<&Session> for SessionDto {
    fn from(session: &Session) -> Self {
        let identity = &session.identity;
        Self {
            schema_version: SESSION_SCHEMA_VERSION,
            identity: IdentityDto {
                id: identity.id.clone(),
                name: identity.name.clone(),
                email: identity.email.clone(),
                avatar: identity.avatar.clone(),
                role: identity.role,
                plan: identity.subscription.plan,
                subscription_status: identity.subscription.status,
                expires_at: identity.subscription.expires_at.map(|t| t.to_rfc3339()),
            },
            established_at: session.established_at.to_rfc3339(),
        }
    }
}

impl TryFrom<SessionDto> for Session {
    type Error = ForgeError;

    fn try_from(dto: SessionDto) -> Result<Session> {
        let identity = Identity {
            id: dto.identity.id,
            name: dto.identity.name,
            email: dto.identity.email,
            avatar: dto.identity.avatar,
            role: dto.identity.role,
            subscription: appforge_core::identity::Subscription {
                plan: dto.identity.plan,
                status: dto.identity.subscription_status,
                expires_at: dto
                    .identity
                    .expires_at
                    .as_deref()
                    .map(parse_timestamp)
                    .transpose()?,
            },
        };

        Ok(Session {
            identity,
            established_at: parse_timestamp(&dto.established_at)?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ForgeError::Serialization {
            format: "RFC3339".to_string(),
            message: format!("'{}': {}", value, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let session = Session::new(Identity::canonical());
        let dto = SessionDto::from(&session);
        assert_eq!(dto.schema_version, SESSION_SCHEMA_VERSION);

        let restored = Session::try_from(dto).unwrap();
        assert_eq!(restored.identity, session.identity);
        // RFC 3339 keeps sub-second precision, so the timestamp survives
        assert_eq!(restored.established_at, session.established_at);
    }

    #[test]
    fn test_bad_timestamp_is_a_serialization_error() {
        let session = Session::new(Identity::canonical());
        let mut dto = SessionDto::from(&session);
        dto.established_at = "not-a-timestamp".to_string();

        let err = Session::try_from(dto).unwrap_err();
        assert!(err.is_serialization());
    }
}
