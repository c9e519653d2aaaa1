use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::id;

/// A single turn in the conversation transcript.
///
/// Immutable once created. `sources`, `token_count` and `latency` are
/// populated only when the remote service provides them and pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// RFC 3339 timestamp string, as sent on the wire.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A retrieval citation attached to an assistant turn. Opaque to this
/// client; rendered as-is by the embedding UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReference {
    pub chunk_id: String,
    pub chapter: String,
    pub section: String,
    pub title: String,
    pub relevance_score: f64,
    pub text_preview: String,
}

impl Message {
    /// A user turn, stamped with a local timestamp and a time-based id.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: id::timestamp_id(),
            role: Role::User,
            content: content.into(),
            timestamp: now_timestamp(),
            sources: None,
            token_count: None,
            latency: None,
        }
    }

    /// An assistant turn built from a server reply. The timestamp is the
    /// server's, the id is generated locally.
    pub fn assistant(
        content: impl Into<String>,
        sources: Vec<SourceReference>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id::assistant_id(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: timestamp.into(),
            sources: Some(sources),
            token_count: None,
            latency: None,
        }
    }

    /// A locally fabricated assistant turn used to surface a failure
    /// inside the transcript itself.
    pub fn fallback(content: impl Into<String>) -> Self {
        Self {
            id: id::fallback_id(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: now_timestamp(),
            sources: None,
            token_count: None,
            latency: None,
        }
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
