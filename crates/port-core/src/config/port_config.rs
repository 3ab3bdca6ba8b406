use serde::{Deserialize, Serialize};

use crate::expiry::ExpiryOption;

/// Configuration for the port subsystem.
///
/// Every field has a serde default so a partial config file stays valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortConfig {
    /// Display name stamped into outgoing bundles as the name hint shown
    /// to the accepting user.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Expiry applied when a caller does not pick one.
    #[serde(default)]
    pub default_expiry: ExpiryOption,
}

fn default_display_name() -> String {
    "Anonymous".to_string()
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            default_expiry: ExpiryOption::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortConfig::default();
        assert_eq!(config.display_name, "Anonymous");
        assert_eq!(config.default_expiry, ExpiryOption::OneWeek);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: PortConfig = serde_json::from_str(r#"{"display_name":"Sam"}"#).unwrap();
        assert_eq!(config.display_name, "Sam");
        assert_eq!(config.default_expiry, ExpiryOption::OneWeek);
    }
}
