use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{FolderId, PortId};
use crate::permissions::Permissions;

/// Locally stored record of an incoming port this user accepted.
///
/// `folder_id` and `permissions` are the accepting user's own choices,
/// made at accept time; they are independent of whatever the bundle
/// originally suggested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadPortData {
    pub port_id: PortId,
    pub version: String,
    /// Contact label, seeded from the bundle's name hint.
    pub contact_name: String,
    pub folder_id: FolderId,
    pub permissions: Permissions,
    pub accepted_at: DateTime<Utc>,
}
