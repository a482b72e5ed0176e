use liminal_core::errors::*;

#[test]
fn session_not_found_carries_thread_id() {
    let err = LiminalError::SessionNotFound {
        thread_id: "thread-42".into(),
    };
    assert!(err.to_string().contains("thread-42"));
}

#[test]
fn storage_error_converts_to_liminal_error() {
    let storage_err = StorageError::Backend {
        message: "connection refused".into(),
    };
    let err: LiminalError = storage_err.into();
    assert!(matches!(err, LiminalError::Storage(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn config_error_converts_to_liminal_error() {
    let config_err = ConfigError::Invalid {
        field: "coherence_window",
        reason: "must be at least 2".into(),
    };
    let err: LiminalError = config_err.into();
    assert!(err.to_string().contains("coherence_window"));
}
