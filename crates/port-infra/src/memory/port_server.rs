use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use port_core::ports::{PortServerError, PortServerPort};
use port_core::{PortBundle, PortData};

/// Queue-backed stand-in for the remote port server.
///
/// `fetch_new_ports` drains whatever has been enqueued; `claim_port`
/// enforces the server's one-shot rule by rejecting a second claim of the
/// same port id.
#[derive(Default)]
pub struct MemoryPortServer {
    pending: Mutex<Vec<PortData>>,
    claimed: Mutex<HashSet<String>>,
}

impl MemoryPortServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a record for the next `fetch_new_ports` call.
    pub async fn enqueue(&self, port: PortData) {
        let mut pending = self.pending.lock().await;
        pending.push(port);
    }
}

#[async_trait]
impl PortServerPort for MemoryPortServer {
    async fn fetch_new_ports(&self) -> Result<Vec<PortData>, PortServerError> {
        let mut pending = self.pending.lock().await;
        let ports: Vec<PortData> = pending.drain(..).collect();
        debug!(count = ports.len(), "serving queued ports");
        Ok(ports)
    }

    async fn claim_port(&self, bundle: &PortBundle) -> Result<(), PortServerError> {
        let mut claimed = self.claimed.lock().await;
        if !claimed.insert(bundle.port_id.as_str().to_string()) {
            return Err(PortServerError::Rejected(format!(
                "port {} already claimed",
                bundle.port_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use port_core::{ExpiryOption, FolderId, Permissions, PortId};

    fn bundle(id: &str) -> PortBundle {
        PortBundle {
            version: "1.0.0".to_string(),
            port_id: PortId::from(id),
            name: "Alice".to_string(),
            expiry_timestamp: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_drains_queue() {
        let server = MemoryPortServer::new();
        server
            .enqueue(PortData {
                id: PortId::from("p-1"),
                version: "1.0.0".to_string(),
                contact_name: "Alice".to_string(),
                folder_id: FolderId::from("f"),
                permissions: Permissions::default(),
                expiry: ExpiryOption::OneDay,
                created_at: Utc::now(),
            })
            .await;

        assert_eq!(server.fetch_new_ports().await.unwrap().len(), 1);
        assert!(server.fetch_new_ports().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_claim_is_rejected() {
        let server = MemoryPortServer::new();

        server.claim_port(&bundle("p-1")).await.unwrap();

        let err = server.claim_port(&bundle("p-1")).await.unwrap_err();
        assert!(matches!(err, PortServerError::Rejected(_)));

        // A different port is unaffected.
        server.claim_port(&bundle("p-2")).await.unwrap();
    }
}
