use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Unique identifier of a port record, assigned at creation and immutable
/// for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortId(String);

impl_id!(PortId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_port_ids_are_unique() {
        let a = PortId::new();
        let b = PortId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_port_id_from_str() {
        let id: PortId = "abc123".into();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
    }
}
