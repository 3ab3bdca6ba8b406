use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::expiry::ExpiryOption;
use crate::ids::{FolderId, PortId};
use crate::permissions::Permissions;

/// Locally stored record of a port this user created.
///
/// The `version` tag is fixed at creation and is the only attribute ever
/// used to select behavior for the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortData {
    pub id: PortId,
    pub version: String,
    /// Label the creator chose for the intended contact.
    pub contact_name: String,
    pub folder_id: FolderId,
    pub permissions: Permissions,
    pub expiry: ExpiryOption,
    pub created_at: DateTime<Utc>,
}

impl PortData {
    /// Instant after which the port is no longer valid. `None` for ports
    /// that never expire.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiry.duration().map(|d| self.created_at + d)
    }

    /// Advisory check; authoritative expiry enforcement lives with the
    /// server and storage collaborators.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(at) => now >= at,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> PortData {
        PortData {
            id: PortId::from("a1b2c3"),
            version: "1.0.0".to_string(),
            contact_name: "Alice".to_string(),
            folder_id: FolderId::from("folder-1"),
            permissions: Permissions::default(),
            expiry: ExpiryOption::OneDay,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_port_data_serialization() {
        let port = sample();

        let json = serde_json::to_string(&port).unwrap();
        let restored: PortData = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, port);
        assert_eq!(restored.version, "1.0.0");
    }

    #[test]
    fn test_expiry_math() {
        let port = sample();
        let expires_at = port.expires_at().unwrap();
        assert_eq!(expires_at, port.created_at + Duration::days(1));

        assert!(!port.is_expired(port.created_at));
        assert!(!port.is_expired(expires_at - Duration::seconds(1)));
        assert!(port.is_expired(expires_at));
    }

    #[test]
    fn test_never_expires() {
        let port = PortData {
            expiry: ExpiryOption::Never,
            ..sample()
        };
        assert_eq!(port.expires_at(), None);
        assert!(!port.is_expired(port.created_at + Duration::days(10_000)));
    }
}
