//! Transient user-facing messages
//!
//! An insertion-ordered queue of toasts with strictly increasing ids. The
//! queue only records each toast's duration; driving the expiry timer is
//! the consumer's job.

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
    pub duration: Duration,
}

/// Optional fields for [`ToastQueue::show`]
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub severity: Option<Severity>,
    pub description: Option<String>,
    pub duration: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id. Ids are strictly increasing for
    /// the lifetime of the queue and never reused.
    pub fn show(&mut self, title: impl Into<String>, options: ToastOptions) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            severity: options.severity.unwrap_or(Severity::Info),
            title: title.into(),
            description: options.description,
            duration: options.duration.unwrap_or(DEFAULT_DURATION),
        });
        id
    }

    pub fn success(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(
            title,
            ToastOptions {
                severity: Some(Severity::Success),
                description,
                ..Default::default()
            },
        )
    }

    pub fn error(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(
            title,
            ToastOptions {
                severity: Some(Severity::Error),
                description,
                ..Default::default()
            },
        )
    }

    pub fn warning(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(
            title,
            ToastOptions {
                severity: Some(Severity::Warning),
                description,
                ..Default::default()
            },
        )
    }

    pub fn info(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(
            title,
            ToastOptions {
                severity: Some(Severity::Info),
                description,
                ..Default::default()
            },
        )
    }

    /// Remove the toast with the given id, preserving the order of the
    /// rest. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.toasts.iter().position(|toast| toast.id == id) {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Remove and return all queued toasts in insertion order
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mut queue = ToastQueue::new();
        queue.show("hello", ToastOptions::default());

        let toast = &queue.toasts()[0];
        assert_eq!(toast.severity, Severity::Info);
        assert_eq!(toast.duration, DEFAULT_DURATION);
        assert!(toast.description.is_none());
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut queue = ToastQueue::new();
        let mut last = queue.show("first", ToastOptions::default());
        for _ in 0..10 {
            let id = queue.success("again", None);
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut queue = ToastQueue::new();
        let first = queue.show("a", ToastOptions::default());
        assert!(queue.remove(first));
        let second = queue.show("b", ToastOptions::default());
        assert!(second > first);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut queue = ToastQueue::new();
        queue.show("a", ToastOptions::default());
        assert!(!queue.remove(999));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut queue = ToastQueue::new();
        let a = queue.info("a", None);
        let b = queue.info("b", None);
        let c = queue.info("c", None);

        assert!(queue.remove(b));
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert_eq!(queue.toasts()[0].id, a);
        assert_eq!(queue.toasts()[1].id, c);
    }
}
