//! User-facing failure messages and the sinks that present them.

use std::fmt;

use tracing::warn;

/// One of the fixed messages shown to the shopper when an operation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    OutOfStock,
    AdditionFailed,
    RemovalFailed,
    QuantityUpdateFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::OutOfStock => "Requested quantity is out of stock",
            Notification::AdditionFailed => "Failed to add product",
            Notification::RemovalFailed => "Failed to remove product",
            Notification::QuantityUpdateFailed => "Failed to update product quantity",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Fire-and-forget sink for notifications (a toast in a browser, stderr in the CLI).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        warn!(notification = ?notification, "{}", notification);
    }
}
