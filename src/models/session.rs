use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted sign-in record
///
/// The stored wire shape is exactly `{"email": ..., "timestamp": <ms>}`,
/// shared with earlier clients of the same storage slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub email: String,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub established_at: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Session {
            email: email.into(),
            established_at: Utc::now(),
        }
    }
}
