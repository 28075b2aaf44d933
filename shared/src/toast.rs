use serde::{Deserialize, Serialize};

/// Default auto-dismiss delay, in milliseconds.
pub const DEFAULT_DISMISS_MS: u32 = 5000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    /// `None` keeps the toast until dismissed by hand.
    pub auto_dismiss_ms: Option<u32>,
}

/// Ordered toast notifications. Only the oldest `max_visible` are shown;
/// the rest wait their turn.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            next_id: 0,
            toasts: Vec::new(),
            max_visible: max_visible.max(1),
        }
    }

    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push_with_timeout(kind, title, message, Some(DEFAULT_DISMISS_MS))
    }

    pub fn push_with_timeout(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
        auto_dismiss_ms: Option<u32>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts[..self.toasts.len().min(self.max_visible)]
    }

    pub fn pending(&self) -> usize {
        self.toasts.len().saturating_sub(self.max_visible)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Percentage of the dismiss timer still left, clamped to `0.0..=100.0`.
pub fn remaining_percent(elapsed_ms: f32, total_ms: f32) -> f32 {
    if total_ms <= 0.0 {
        return 0.0;
    }
    (100.0 - elapsed_ms / total_ms * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toasts_are_visible_first() {
        let mut queue = ToastQueue::new(2);
        let first = queue.push(ToastKind::Info, "Saved", "Profile saved");
        queue.push(ToastKind::Error, "Failed", "Upload failed");
        queue.push(ToastKind::Warning, "Careful", "Unsaved changes");

        assert_eq!(queue.visible().len(), 2);
        assert_eq!(queue.visible()[0].id, first);
        assert_eq!(queue.pending(), 1);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.visible()[1].title, "Careful");
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "a", "");
        queue.dismiss(a);
        let b = queue.push(ToastKind::Info, "b", "");
        assert_ne!(a, b);
        assert_eq!(queue.visible()[0].auto_dismiss_ms, Some(DEFAULT_DISMISS_MS));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(remaining_percent(0.0, 5000.0), 100.0);
        assert_eq!(remaining_percent(2500.0, 5000.0), 50.0);
        assert_eq!(remaining_percent(9000.0, 5000.0), 0.0);
        assert_eq!(remaining_percent(10.0, 0.0), 0.0);
    }
}
