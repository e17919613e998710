//! Notification sink for user-visible failure messages.

use tracing::warn;

/// Receives the single message shown to the user when an operation fails.
///
/// Notifications are fire-and-forget: implementations must not block and
/// have no way to report back.
pub trait Notifier: Send + Sync {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

/// A notifier that emits each message as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(notification = message, "Operation failed");
    }
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}
