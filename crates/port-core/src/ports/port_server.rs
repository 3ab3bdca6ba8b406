use async_trait::async_trait;

use crate::port::{PortBundle, PortData};
use crate::ports::errors::PortServerError;

/// Remote port server collaborator.
#[async_trait]
pub trait PortServerPort: Send + Sync {
    /// Pull port records issued or updated since the last sync.
    async fn fetch_new_ports(&self) -> Result<Vec<PortData>, PortServerError>;

    /// Claim an offered port. One-shot: the server invalidates the port on
    /// the first successful claim.
    async fn claim_port(&self, bundle: &PortBundle) -> Result<(), PortServerError>;
}
