/// Sink for user-facing notifications. The workflow pushes success and
/// error toasts through this; it never propagates an error past itself.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink that emits structured logs. An embedding UI supplies its
/// own implementation backed by its toast system.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(kind = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(kind = "error", "{}", message);
    }
}
