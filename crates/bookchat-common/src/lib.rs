pub mod events;
pub mod id;
pub mod types;

pub use events::{selection_query, Event, EventBus};
pub use id::{assistant_id, fallback_id, timestamp_id};
pub use types::{Message, Role, SourceReference};
