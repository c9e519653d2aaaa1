use tokio::sync::broadcast;

/// Cross-component intents. The selection handler publishes, the chat
/// panel subscribes; neither holds a reference to the other.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectedTextQuery { query: String },
}

/// In-process publish/subscribe channel, injected at composition time
/// rather than living in ambient global state.
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish an event, returning the number of subscribers that will
    /// receive it. Zero subscribers is not an error.
    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

/// The fixed prompt wrapping a reader's text selection.
pub fn selection_query(selected: &str) -> String {
    format!("Explain this selected text: {}", selected.trim())
}
