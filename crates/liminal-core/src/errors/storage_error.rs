/// Storage-layer errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend could not be reached or rejected the command.
    #[error("storage backend error: {message}")]
    Backend { message: String },

    /// A session could not be encoded for persistence.
    #[error("failed to serialize session {thread_id}: {reason}")]
    Serialization { thread_id: String, reason: String },
}
