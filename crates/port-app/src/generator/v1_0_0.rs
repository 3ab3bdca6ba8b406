//! Version 1.0.0 of the outgoing port format.

use tracing::debug;

use port_core::{
    ExpiryOption, FolderId, GeneratorVersion, Permissions, PortBundle, PortData, PortError, PortId,
};

use super::GeneratorDeps;

/// Build and persist a fresh 1.0.0 port record.
///
/// Returns the record as echoed back by storage; the factory maps `None`
/// to `NoPortCreated`.
pub(crate) async fn create(
    deps: &GeneratorDeps,
    contact_name: &str,
    folder_id: FolderId,
    permissions: Permissions,
    expiry: ExpiryOption,
) -> Result<Option<PortData>, PortError> {
    let data = PortData {
        id: PortId::new(),
        version: GeneratorVersion::V1_0_0.as_str().to_string(),
        contact_name: contact_name.to_string(),
        folder_id,
        permissions,
        expiry,
        created_at: deps.clock.now(),
    };
    debug!(port_id = %data.id, "persisting new port");
    Ok(deps.repo.insert_port(data).await?)
}

/// Pull newly issued ports from the server and store each one.
pub(crate) async fn fetch_new_ports(deps: &GeneratorDeps) -> Result<(), PortError> {
    let ports = deps.server.fetch_new_ports().await?;
    debug!(count = ports.len(), "fetched new ports from server");
    for port in ports {
        deps.repo.insert_port(port).await?;
    }
    Ok(())
}

/// Shareable bundle for a 1.0.0 port record.
pub(crate) fn bundle(data: &PortData, display_name: &str) -> PortBundle {
    PortBundle {
        version: data.version.clone(),
        port_id: data.id.clone(),
        name: display_name.to_string(),
        expiry_timestamp: data.expires_at(),
    }
}
