//! Port subsystem configuration domain model.

pub mod port_config;

pub use port_config::PortConfig;
