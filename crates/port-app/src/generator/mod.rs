//! Outgoing side: creating, reloading and exporting single-use ports.

use std::sync::Arc;

use tracing::{debug, info, warn};

use port_core::ports::{ClockPort, PortRepositoryPort, PortServerPort};
use port_core::{
    ExpiryOption, FolderId, GeneratorVersion, Permissions, PortBundle, PortConfig, PortData,
    PortError, PortId,
};

mod v1_0_0;

/// Collaborator handles threaded into every generator strategy.
#[derive(Clone)]
pub(crate) struct GeneratorDeps {
    pub(crate) repo: Arc<dyn PortRepositoryPort>,
    pub(crate) server: Arc<dyn PortServerPort>,
    pub(crate) clock: Arc<dyn ClockPort>,
}

/// Version-dispatching factory for the outgoing side of the port protocol.
///
/// Each operation resolves a version tag to the matching strategy and
/// delegates; the factory itself never touches wire or storage formats.
pub struct PortGeneratorFactory {
    deps: GeneratorDeps,
    config: PortConfig,
}

impl PortGeneratorFactory {
    pub fn new(
        repo: Arc<dyn PortRepositoryPort>,
        server: Arc<dyn PortServerPort>,
        clock: Arc<dyn ClockPort>,
        config: PortConfig,
    ) -> Self {
        Self {
            deps: GeneratorDeps { repo, server, clock },
            config,
        }
    }

    /// Create a new single-use port and return a live handle on it.
    ///
    /// `expiry` falls back to the configured default, `version` to
    /// [`GeneratorVersion::LATEST`]. Creation is all-or-nothing: a write
    /// that lands nowhere surfaces as [`PortError::NoPortCreated`].
    pub async fn create(
        &self,
        contact_name: &str,
        folder_id: FolderId,
        permissions: Permissions,
        expiry: Option<ExpiryOption>,
        version: Option<&str>,
    ) -> Result<PortGenerator, PortError> {
        let version = GeneratorVersion::select(Some(version.unwrap_or(GeneratorVersion::LATEST)))?;
        let expiry = expiry.unwrap_or(self.config.default_expiry);

        let data = match version {
            GeneratorVersion::V1_0_0 => {
                v1_0_0::create(&self.deps, contact_name, folder_id, permissions, expiry).await?
            }
        };
        let data = data.ok_or(PortError::NoPortCreated)?;

        info!(port_id = %data.id, version = version.as_str(), "created port");
        self.load(data)
    }

    /// Reconstruct a generator around an already loaded record.
    ///
    /// Pure: selects the strategy by the record's version tag and performs
    /// no I/O. A record with an unregistered version still fails.
    pub fn load(&self, data: PortData) -> Result<PortGenerator, PortError> {
        let version = GeneratorVersion::select(Some(&data.version))?;
        Ok(PortGenerator {
            version,
            data,
            display_name: self.config.display_name.clone(),
        })
    }

    /// Reload the generator for a previously created, not yet consumed
    /// port.
    ///
    /// [`PortError::NoPortFound`] does not distinguish a port that never
    /// existed from one already consumed and purged; storage collapses
    /// both.
    pub async fn from_port_id(&self, port_id: &PortId) -> Result<PortGenerator, PortError> {
        debug!(%port_id, "loading port from storage");
        let data = self
            .deps
            .repo
            .get_port_data(port_id)
            .await?
            .ok_or_else(|| PortError::NoPortFound(port_id.clone()))?;
        self.load(data)
    }

    /// Pull newly issued ports from the server into local storage.
    /// Side effect only.
    pub async fn fetch_new_ports(&self, version: Option<&str>) -> Result<(), PortError> {
        let version = GeneratorVersion::select(Some(version.unwrap_or(GeneratorVersion::LATEST)))?;
        match version {
            GeneratorVersion::V1_0_0 => v1_0_0::fetch_new_ports(&self.deps).await,
        }
    }

    /// All locally stored ports that are still usable.
    ///
    /// Records whose stored version no longer resolves (a downgrade left
    /// them behind) are skipped with a warning rather than failing the
    /// whole listing.
    pub async fn open_ports(&self) -> Result<Vec<PortGenerator>, PortError> {
        let now = self.deps.clock.now();
        let mut out = Vec::new();
        for data in self.deps.repo.list_ports().await? {
            if data.is_expired(now) {
                continue;
            }
            let id = data.id.clone();
            match self.load(data) {
                Ok(generator) => out.push(generator),
                Err(PortError::UnsupportedVersion { .. } | PortError::MissingVersion { .. }) => {
                    warn!(port_id = %id, "skipping port with unresolvable version");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }
}

/// Live handle on a created port record.
#[derive(Debug)]
pub struct PortGenerator {
    version: GeneratorVersion,
    data: PortData,
    display_name: String,
}

impl PortGenerator {
    pub fn version(&self) -> GeneratorVersion {
        self.version
    }

    pub fn data(&self) -> &PortData {
        &self.data
    }

    /// Export the shareable bundle for this port. Bundle layout is owned
    /// by the record's version.
    pub fn bundle(&self) -> PortBundle {
        match self.version {
            GeneratorVersion::V1_0_0 => v1_0_0::bundle(&self.data, &self.display_name),
        }
    }
}
