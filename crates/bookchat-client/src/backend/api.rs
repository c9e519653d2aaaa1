//! Backend trait implementation for HttpBackend (chat, history, clear).

use async_trait::async_trait;
use tracing::debug;

use crate::{Backend, ChatError, ChatRequest, ChatResponse, HistoryRequest, HistoryResponse};

use super::client::HttpBackend;

#[async_trait]
impl Backend for HttpBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        debug!(session_id = ?request.session_id, "chat request");

        let response = self
            .http
            .post(self.chat_url())
            .json(request)
            .send()
            .await
            .map_err(request_error)?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))
    }

    async fn history(&self, request: &HistoryRequest) -> Result<HistoryResponse, ChatError> {
        debug!(session_id = %request.session_id, "history request");

        let response = self
            .http
            .get(self.history_url())
            .query(request)
            .send()
            .await
            .map_err(request_error)?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))
    }

    async fn clear_session(&self, session_id: &str) -> Result<(), ChatError> {
        debug!(%session_id, "clear session request");

        let response = self
            .http
            .post(self.clear_url())
            .json(&serde_json::json!({ "session_id": session_id }))
            .send()
            .await
            .map_err(request_error)?;

        check_status(response).await?;
        Ok(())
    }
}

/// Map a reqwest send error to the taxonomy. A missed deadline is
/// distinct from a connection-level failure.
fn request_error(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        ChatError::Timeout
    } else {
        ChatError::Network(err.to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ChatError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(transport_error(status.as_u16(), body))
}

fn transport_error(status: u16, body: String) -> ChatError {
    // Diagnostic bodies can be arbitrarily large; keep the first 200 chars.
    let body = body.chars().take(200).collect::<String>();
    ChatError::Transport { status, body }
}
