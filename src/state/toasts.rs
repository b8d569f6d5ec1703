//! Transient toast notifications

use crate::workflow::Notifier;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Toasts kept on screen at once; older ones are dropped first
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    /// How long a toast stays visible (4 seconds)
    const LIFETIME: Duration = Duration::from_millis(4000);

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= Self::LIFETIME
    }
}

/// Shared queue of toasts, written by the workflow and read by the renderer
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push_at(&self, kind: ToastKind, message: &str, created_at: Instant) {
        let mut toasts = self.lock();
        toasts.push_back(Toast {
            kind,
            message: message.to_string(),
            created_at,
        });
        while toasts.len() > MAX_TOASTS {
            toasts.pop_front();
        }
    }

    fn push(&self, kind: ToastKind, message: &str) {
        self.push_at(kind, message, Instant::now());
    }

    /// Snapshot of the toasts that have not expired yet, oldest first
    pub fn visible(&self) -> Vec<Toast> {
        self.lock()
            .iter()
            .filter(|t| !t.is_expired())
            .cloned()
            .collect()
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn prune_expired(&self) -> bool {
        let mut toasts = self.lock();
        let before = toasts.len();
        toasts.retain(|t| !t.is_expired());
        toasts.len() != before
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn failure(&self, message: &str) {
        self.push(ToastKind::Failure, message);
    }
}
