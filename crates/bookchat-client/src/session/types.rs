//! Session types and the loading-flag guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ChatError;

/// What happens to the local transcript when the remote clear fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Empty the local transcript whether or not the remote call
    /// succeeded.
    #[default]
    Always,
    /// Keep the local transcript unless the remote session was actually
    /// invalidated.
    OnRemoteSuccess,
}

/// Guard that clears the loading flag on drop, ensuring it is always
/// released even if the future is cancelled or an early return occurs.
pub(crate) struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    /// Attempt to mark a request in flight. Returns `Err` if one already
    /// is.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, ChatError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ChatError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
