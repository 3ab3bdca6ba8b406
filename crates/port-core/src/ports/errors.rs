use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum PortServerError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server rejected request: {0}")]
    Rejected(String),
}
