//! Chat client core for the book assistant widget.
//!
//! Provides the backend transport client and session manager with:
//! - Chat turns against the retrieval backend (`/chat`)
//! - Conversation history reload (`/history`)
//! - Remote session invalidation (`/sessions/clear`)
//! - Optimistic transcript updates with in-transcript error recovery
//!
//! The rendering layer is not part of this crate; it consumes the
//! `ChatSession` accessors and drives it with user intents.

pub mod backend;
pub mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bookchat_common::{Message, SourceReference};

pub use backend::{BackendConfig, HttpBackend};
pub use session::{ChatSession, ClearPolicy};

/// Transport seam for the three remote operations. Implementations hold
/// no conversation state; retries and auth are out of scope.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;

    async fn history(&self, request: &HistoryRequest) -> Result<HistoryResponse, ChatError>;

    async fn clear_session(&self, session_id: &str) -> Result<(), ChatError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub sources: Vec<SourceReference>,
    pub latency: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRequest {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub messages: Vec<Message>,
    pub total_count: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),
    #[error("transport error: HTTP {status}: {body}")]
    Transport { status: u16, body: String },
    #[error("request timed out")]
    Timeout,
    #[error("parse error: {0}")]
    Parse(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("session is busy with another request")]
    Busy,
}
