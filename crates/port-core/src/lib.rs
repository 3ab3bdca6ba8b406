//! # port-core
//!
//! Core domain models and port contracts for single-use connection ports.
//!
//! A port is a one-time use connection point that can only be used once to
//! establish a contact relationship between two users. After the
//! connection is made, the port becomes invalid. This crate contains the
//! pure domain: record shapes, the version tags that select behavior for
//! each record, the error taxonomy, and the trait contracts the
//! application layer drives its collaborators through. No I/O lives here.

// Public module exports
pub mod config;
pub mod errors;
pub mod expiry;
pub mod ids;
pub mod permissions;
pub mod port;
pub mod ports;
pub mod version;

// Re-export commonly used types at the crate root
pub use config::PortConfig;
pub use errors::PortError;
pub use expiry::{ExpiryOption, DEFAULT_EXPIRY_INDEX, EXPIRY_OPTIONS};
pub use ids::{FolderId, PortId};
pub use permissions::Permissions;
pub use port::{decode_bundle_link, PortBundle, PortData, ReadPortData};
pub use version::{GeneratorVersion, ReaderVersion};
