//! Version 1.0.0 of the incoming port format.

use tracing::debug;

use port_core::{FolderId, Permissions, PortBundle, PortError, ReadPortData};

use super::ReaderDeps;

/// Structural validation for 1.0.0 bundles.
///
/// The generic version check has already run; this owns everything
/// format-specific. Unknown fields are ignored so older readers keep
/// working when a format gains optional fields.
pub(crate) fn validate_bundle(value: &serde_json::Value) -> Result<PortBundle, PortError> {
    let bundle: PortBundle = serde_json::from_value(value.clone())
        .map_err(|e| PortError::InvalidBundle(e.to_string()))?;

    if bundle.port_id.as_str().is_empty() {
        return Err(PortError::InvalidBundle("empty port id".to_string()));
    }
    if bundle.name.is_empty() {
        return Err(PortError::InvalidBundle("empty name hint".to_string()));
    }
    Ok(bundle)
}

/// Claim the port on the server and persist the local read record.
pub(crate) async fn accept(
    deps: &ReaderDeps,
    bundle: &PortBundle,
    permissions: Permissions,
    folder_id: FolderId,
) -> Result<Option<ReadPortData>, PortError> {
    if let Some(at) = bundle.expiry_timestamp {
        if deps.clock.now() >= at {
            return Err(PortError::InvalidBundle(
                "port bundle has expired".to_string(),
            ));
        }
    }

    deps.server.claim_port(bundle).await?;
    debug!(port_id = %bundle.port_id, "claimed port on server");

    let data = ReadPortData {
        port_id: bundle.port_id.clone(),
        version: bundle.version.clone(),
        contact_name: bundle.name.clone(),
        folder_id,
        permissions,
        accepted_at: deps.clock.now(),
    };
    Ok(deps.repo.insert_read_port(data).await?)
}
