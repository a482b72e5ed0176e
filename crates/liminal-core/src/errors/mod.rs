//! Error types for every layer of the session store.

mod config_error;
mod storage_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Top-level error for session store operations.
#[derive(Debug, thiserror::Error)]
pub enum LiminalError {
    /// The operation needs an existing session and there is none.
    #[error("session not found: {thread_id}")]
    SessionNotFound { thread_id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type LiminalResult<T> = Result<T, LiminalError>;
