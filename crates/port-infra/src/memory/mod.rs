//! In-memory reference adapters.

pub mod port_repository;
pub mod port_server;

pub use port_repository::MemoryPortRepository;
pub use port_server::MemoryPortServer;
