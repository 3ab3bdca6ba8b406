use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use port_core::ports::{PortRepositoryError, PortRepositoryPort};
use port_core::{PortData, PortId, ReadPortData};

/// HashMap-backed port repository.
///
/// Suitable for tests and development. The insert methods fulfil the
/// write-echo contract by reading the stored entry back rather than
/// returning their argument.
#[derive(Default)]
pub struct MemoryPortRepository {
    ports: Mutex<HashMap<String, PortData>>,
    read_ports: Mutex<HashMap<String, ReadPortData>>,
}

impl MemoryPortRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted incoming port records, for assertions in tests.
    pub async fn read_port(&self, id: &PortId) -> Option<ReadPortData> {
        let read_ports = self.read_ports.lock().await;
        read_ports.get(id.as_str()).cloned()
    }
}

#[async_trait]
impl PortRepositoryPort for MemoryPortRepository {
    async fn get_port_data(
        &self,
        id: &PortId,
    ) -> Result<Option<PortData>, PortRepositoryError> {
        let ports = self.ports.lock().await;
        Ok(ports.get(id.as_str()).cloned())
    }

    async fn insert_port(
        &self,
        port: PortData,
    ) -> Result<Option<PortData>, PortRepositoryError> {
        let mut ports = self.ports.lock().await;
        let key = port.id.as_str().to_string();
        ports.insert(key.clone(), port);
        Ok(ports.get(&key).cloned())
    }

    async fn insert_read_port(
        &self,
        port: ReadPortData,
    ) -> Result<Option<ReadPortData>, PortRepositoryError> {
        let mut read_ports = self.read_ports.lock().await;
        let key = port.port_id.as_str().to_string();
        read_ports.insert(key.clone(), port);
        Ok(read_ports.get(&key).cloned())
    }

    async fn list_ports(&self) -> Result<Vec<PortData>, PortRepositoryError> {
        let ports = self.ports.lock().await;
        Ok(ports.values().cloned().collect())
    }
}
