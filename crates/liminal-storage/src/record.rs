//! JSON record codec.
//!
//! Timestamps are written as RFC 3339 strings and parsed back into
//! `DateTime<Utc>`, so records survive a round trip unchanged.

use liminal_core::errors::StorageError;
use liminal_core::Session;

pub fn encode_session(session: &Session) -> Result<String, StorageError> {
    serde_json::to_string(session).map_err(|e| StorageError::Serialization {
        thread_id: session.thread_id.clone(),
        reason: e.to_string(),
    })
}

pub fn decode_session(raw: &str) -> Result<Session, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn timestamps_are_iso_strings() {
        let session = Session::new("t1", Utc::now());
        let raw = encode_session(&session).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let created = value["metadata"]["created_at"].as_str().unwrap();
        assert!(created.contains('T'));
        assert_eq!(decode_session(&raw).unwrap(), session);
    }

    #[test]
    fn garbage_fails_to_decode() {
        assert!(decode_session("{not json").is_err());
        assert!(decode_session(r#"{"thread_id": 5}"#).is_err());
    }
}
