//! Error taxonomy for the port subsystem.
//!
//! Every condition here is fail-fast and surfaces directly to the caller;
//! nothing is retried or silently substituted with a default.

use thiserror::Error;

use crate::ids::PortId;
use crate::ports::errors::{PortRepositoryError, PortServerError};

#[derive(Debug, Error)]
pub enum PortError {
    /// No version tag was supplied to a selector.
    #[error("no version specified for port {role}")]
    MissingVersion { role: &'static str },

    /// The version tag has no registered implementation.
    #[error("unsupported port {role} version: {version}")]
    UnsupportedVersion { role: &'static str, version: String },

    /// Lookup by id returned nothing. Storage does not distinguish a port
    /// that never existed from one already consumed and purged.
    #[error("no port found for id {0}")]
    NoPortFound(PortId),

    /// An externally supplied bundle failed structural validation.
    #[error("invalid port bundle: {0}")]
    InvalidBundle(String),

    /// The write for a newly created port landed nowhere.
    #[error("port creation produced no stored record")]
    NoPortCreated,

    /// The write for an accepted port landed nowhere.
    #[error("port acceptance produced no stored record")]
    NoPortAccepted,

    #[error(transparent)]
    Repository(#[from] PortRepositoryError),

    #[error(transparent)]
    Server(#[from] PortServerError),
}
