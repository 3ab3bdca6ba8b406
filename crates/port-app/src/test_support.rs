//! Mock implementations of the port traits for unit testing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use port_core::ports::{
    ClockPort, PortRepositoryError, PortRepositoryPort, PortServerError, PortServerPort,
};
use port_core::{PortBundle, PortData, PortId, ReadPortData};

mock! {
    pub Repo {}

    #[async_trait]
    impl PortRepositoryPort for Repo {
        async fn get_port_data(&self, id: &PortId)
            -> Result<Option<PortData>, PortRepositoryError>;
        async fn insert_port(&self, port: PortData)
            -> Result<Option<PortData>, PortRepositoryError>;
        async fn insert_read_port(&self, port: ReadPortData)
            -> Result<Option<ReadPortData>, PortRepositoryError>;
        async fn list_ports(&self) -> Result<Vec<PortData>, PortRepositoryError>;
    }
}

mock! {
    pub Server {}

    #[async_trait]
    impl PortServerPort for Server {
        async fn fetch_new_ports(&self) -> Result<Vec<PortData>, PortServerError>;
        async fn claim_port(&self, bundle: &PortBundle) -> Result<(), PortServerError>;
    }
}

/// Fixed clock for deterministic time-dependent tests.
pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
