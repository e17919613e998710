//! Terminal notification sink.

use connections::Notifier;

use crate::output;

/// Prints each notification as an error line on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        output::error(message);
    }
}
