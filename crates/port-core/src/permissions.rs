use serde::{Deserialize, Serialize};

/// Strict permission set attached to a port and, later, to the contact the
/// port creates.
///
/// The port subsystem threads this through unchanged; interpretation
/// belongs to the permission subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub notifications: bool,
    pub display_picture: bool,
    pub read_receipts: bool,
    pub contact_sharing: bool,
    pub disappearing_messages: bool,
    /// Timer in seconds; only meaningful when `disappearing_messages` is set.
    pub disappearing_duration_secs: u64,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            notifications: true,
            display_picture: false,
            read_receipts: true,
            contact_sharing: false,
            disappearing_messages: false,
            disappearing_duration_secs: 0,
        }
    }
}
