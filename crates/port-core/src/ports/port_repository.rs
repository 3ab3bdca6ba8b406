use async_trait::async_trait;

use crate::ids::PortId;
use crate::port::{PortData, ReadPortData};
use crate::ports::errors::PortRepositoryError;

#[async_trait]
pub trait PortRepositoryPort: Send + Sync {
    /// Look up a created port by id. `Ok(None)` covers both a port that
    /// never existed and one already consumed and purged; storage does not
    /// distinguish them.
    async fn get_port_data(&self, id: &PortId)
        -> Result<Option<PortData>, PortRepositoryError>;

    /// Persist a created port and return the record as read back after the
    /// write. `Ok(None)` means the write landed nowhere.
    async fn insert_port(&self, port: PortData)
        -> Result<Option<PortData>, PortRepositoryError>;

    /// Persist an accepted incoming port. Same read-back contract as
    /// [`insert_port`](Self::insert_port).
    async fn insert_read_port(
        &self,
        port: ReadPortData,
    ) -> Result<Option<ReadPortData>, PortRepositoryError>;

    /// All locally stored created ports.
    async fn list_ports(&self) -> Result<Vec<PortData>, PortRepositoryError>;
}
