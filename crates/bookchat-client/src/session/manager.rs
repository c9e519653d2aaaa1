//! ChatSession struct and transcript state.

use std::sync::atomic::{AtomicBool, Ordering};

use bookchat_common::Message;

use super::types::ClearPolicy;

pub(super) const DEFAULT_MAX_MESSAGE_LENGTH: usize = 4000;

/// A conversation with the retrieval backend.
pub struct ChatSession {
    /// Ordered transcript, oldest first.
    pub(super) messages: Vec<Message>,
    /// Opaque server-side conversation id. Absent until the first reply
    /// supplies one, or until set at construction to resume.
    pub(super) session_id: Option<String>,
    /// Whether a request is currently in flight.
    pub(super) loading: AtomicBool,
    /// What happens to the local transcript when the remote clear fails.
    pub(super) clear_policy: ClearPolicy,
    /// Sampling temperature forwarded on every chat turn, when set.
    pub(super) temperature: Option<f64>,
    /// Inputs longer than this are rejected before any request is made.
    pub(super) max_message_length: usize,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            session_id: None,
            loading: AtomicBool::new(false),
            clear_policy: ClearPolicy::default(),
            temperature: None,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_clear_policy(mut self, policy: ClearPolicy) -> Self {
        self.clear_policy = policy;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_message_length(mut self, max: usize) -> Self {
        self.max_message_length = max;
        self
    }

    /// The full transcript, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The current server-side conversation id, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Whether a request is in flight. The render path polls this for the
    /// typing indicator and to disable the input.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
