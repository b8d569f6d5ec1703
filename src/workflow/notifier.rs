//! Out-of-band notification surface

/// Fire-and-forget user notifications (toasts)
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}
