//! Incoming side: validating and accepting externally received ports.

use std::sync::Arc;

use tracing::info;

use port_core::ports::{ClockPort, PortRepositoryPort, PortServerPort};
use port_core::{
    FolderId, Permissions, PortBundle, PortError, ReadPortData, ReaderVersion,
};

mod v1_0_0;

/// Collaborator handles threaded into every reader strategy.
#[derive(Clone)]
pub(crate) struct ReaderDeps {
    pub(crate) repo: Arc<dyn PortRepositoryPort>,
    pub(crate) server: Arc<dyn PortServerPort>,
    pub(crate) clock: Arc<dyn ClockPort>,
}

/// Version-dispatching factory for the incoming side of the port protocol.
pub struct PortReaderFactory {
    deps: ReaderDeps,
}

impl PortReaderFactory {
    pub fn new(
        repo: Arc<dyn PortRepositoryPort>,
        server: Arc<dyn PortServerPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            deps: ReaderDeps { repo, server, clock },
        }
    }

    /// Structural gate between arbitrary external input and the typed
    /// [`PortBundle`] shape.
    ///
    /// The generic checks (payload present, version tag present) run before
    /// any version-specific validation; the selected strategy then owns the
    /// rest. This is the only place a `PortBundle` is built from untrusted
    /// data.
    pub fn validate_bundle(value: &serde_json::Value) -> Result<PortBundle, PortError> {
        let version = value.get("version").and_then(|v| v.as_str()).unwrap_or("");
        if version.is_empty() {
            return Err(PortError::InvalidBundle(
                "missing version field".to_string(),
            ));
        }
        match ReaderVersion::select(Some(version))? {
            ReaderVersion::V1_0_0 => v1_0_0::validate_bundle(value),
        }
    }

    /// Accept a validated bundle: claim the port with the server and
    /// persist the local record.
    ///
    /// `permissions` and `folder_id` are the accepting user's choices and
    /// override anything the bundle suggested. Acceptance is
    /// all-or-nothing; an empty write echo surfaces as
    /// [`PortError::NoPortAccepted`].
    pub async fn accept(
        &self,
        bundle: &PortBundle,
        permissions: Permissions,
        folder_id: FolderId,
    ) -> Result<PortReader, PortError> {
        let version = ReaderVersion::select(Some(&bundle.version))?;
        let data = match version {
            ReaderVersion::V1_0_0 => {
                v1_0_0::accept(&self.deps, bundle, permissions, folder_id).await?
            }
        };
        let data = data.ok_or(PortError::NoPortAccepted)?;

        info!(port_id = %data.port_id, version = version.as_str(), "accepted port");
        self.load(data)
    }

    /// Reconstruct a reader around an already loaded record. Pure; no I/O.
    pub fn load(&self, data: ReadPortData) -> Result<PortReader, PortError> {
        let version = ReaderVersion::select(Some(&data.version))?;
        Ok(PortReader { version, data })
    }
}

/// Live handle on an accepted port record.
#[derive(Debug)]
pub struct PortReader {
    version: ReaderVersion,
    data: ReadPortData,
}

impl PortReader {
    pub fn version(&self) -> ReaderVersion {
        self.version
    }

    pub fn data(&self) -> &ReadPortData {
        &self.data
    }
}
