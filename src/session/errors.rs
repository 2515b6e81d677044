use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// The backing store rejected a write, e.g. browser storage quota.
    #[error("Storage error: {0}")]
    Storage(String),
}
