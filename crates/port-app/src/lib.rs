//! Application layer for single-use connection ports.
//!
//! Holds the version-dispatching generator and reader factories plus the
//! concrete per-version strategies. All I/O goes through the port traits
//! defined in `port-core`, so any storage or server stack can sit behind
//! them.

pub mod generator;
pub mod reader;

#[cfg(test)]
pub(crate) mod test_support;

pub use generator::{PortGenerator, PortGeneratorFactory};
pub use reader::{PortReader, PortReaderFactory};
