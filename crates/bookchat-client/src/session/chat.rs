//! Async session operations (send, clear, history).

use tracing::{debug, error, warn};

use bookchat_common::Message;

use crate::{Backend, ChatError, ChatRequest, HistoryRequest};

use super::manager::ChatSession;
use super::types::{ClearPolicy, LoadingGuard};

/// Shown in the transcript when a chat turn fails.
pub(super) const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

/// Shown in the transcript when a chat turn exceeds the deadline.
pub(super) const TIMEOUT_REPLY: &str = "Sorry, the request timed out. Please try again.";

impl ChatSession {
    /// Send a user turn and append the assistant's reply.
    ///
    /// The user message is appended to the transcript before the request
    /// is issued. Transport failures are not raised: they surface as a
    /// synthetic assistant message and the call still returns `Ok`. Only
    /// input validation and an already-in-flight request reject.
    pub async fn send(
        &mut self,
        backend: &dyn Backend,
        text: impl Into<String>,
    ) -> Result<(), ChatError> {
        self.send_inner(backend, text.into(), None).await
    }

    /// Like [`send`](Self::send), forwarding the reader's text selection
    /// so the backend can ground retrieval on it.
    pub async fn send_with_selection(
        &mut self,
        backend: &dyn Backend,
        text: impl Into<String>,
        selected_text: impl Into<String>,
    ) -> Result<(), ChatError> {
        self.send_inner(backend, text.into(), Some(selected_text.into()))
            .await
    }

    async fn send_inner(
        &mut self,
        backend: &dyn Backend,
        text: String,
        selected_text: Option<String>,
    ) -> Result<(), ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::Validation("message is empty".into()));
        }
        if text.chars().count() > self.max_message_length {
            return Err(ChatError::Validation(format!(
                "message exceeds {} characters",
                self.max_message_length
            )));
        }

        let _guard = LoadingGuard::acquire(&self.loading)?;

        // Optimistic insert: the user turn is visible before the reply.
        self.messages.push(Message::user(text.clone()));

        let request = ChatRequest {
            message: text,
            session_id: self.session_id.clone(),
            selected_text,
            temperature: self.temperature,
        };

        match backend.chat(&request).await {
            Ok(response) => {
                if self.session_id.is_none() {
                    self.session_id = Some(response.session_id.clone());
                }
                self.messages.push(Message::assistant(
                    response.response,
                    response.sources,
                    response.timestamp,
                ));
            }
            Err(err) => {
                error!(error = %err, "chat request failed");
                let reply = match err {
                    ChatError::Timeout => TIMEOUT_REPLY,
                    _ => FALLBACK_REPLY,
                };
                self.messages.push(Message::fallback(reply));
            }
        }

        Ok(())
    }

    /// Empty the transcript, invalidating the remote session first when
    /// one exists. A remote failure is logged, never surfaced; whether it
    /// also empties the local transcript is governed by the configured
    /// [`ClearPolicy`].
    pub async fn clear(&mut self, backend: &dyn Backend) {
        let Some(session_id) = self.session_id.clone() else {
            self.messages.clear();
            return;
        };

        match backend.clear_session(&session_id).await {
            Ok(()) => self.messages.clear(),
            Err(err) => {
                warn!(error = %err, "failed to clear session remotely");
                if self.clear_policy == ClearPolicy::Always {
                    self.messages.clear();
                }
            }
        }
    }

    /// Replace the transcript with the server-side history for the
    /// current session id. Failures are logged and leave the transcript
    /// unchanged; no-op without a session id.
    pub async fn load_history(&mut self, backend: &dyn Backend) {
        let Some(session_id) = self.session_id.clone() else {
            return;
        };
        let Ok(_guard) = LoadingGuard::acquire(&self.loading) else {
            debug!("history load skipped, request already in flight");
            return;
        };

        let request = HistoryRequest {
            session_id,
            limit: None,
        };
        match backend.history(&request).await {
            Ok(history) => self.messages = history.messages,
            Err(err) => error!(error = %err, "failed to load history"),
        }
    }

    /// Resume an existing conversation: build a session bound to the
    /// given id and load its history immediately.
    pub async fn resume(backend: &dyn Backend, session_id: impl Into<String>) -> Self {
        let mut session = Self::new().with_session_id(session_id);
        session.load_history(backend).await;
        session
    }
}
