use chrono::Utc;

/// Millisecond-epoch id for user turns. The wire protocol expects plain
/// time-based string ids for caller-generated messages.
pub fn timestamp_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Id for a locally constructed assistant turn.
pub fn assistant_id() -> String {
    format!("assistant-{}", Utc::now().timestamp_millis())
}

/// Id for a locally fabricated error turn.
pub fn fallback_id() -> String {
    format!("error-{}", Utc::now().timestamp_millis())
}
