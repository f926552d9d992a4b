use shared_types::ResponseType;
use shared_ui::{ToastOptions, Toasts};

use super::NotificationSink;

/// Shows notifications as toasts from the nearest `ToastProvider`.
#[derive(Clone)]
pub struct ToastSink(pub Toasts);

impl NotificationSink for ToastSink {
    fn notify(&self, kind: ResponseType, message: &str) {
        match kind {
            ResponseType::Success => self.0.success(message.to_string(), ToastOptions::new()),
            ResponseType::Error => self.0.error(message.to_string(), ToastOptions::new()),
        }
    }
}
