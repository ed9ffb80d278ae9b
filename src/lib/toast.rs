//! Transient notification queue behind the toast stack. The newest toast is
//! shown on top; each one disappears after the configured timeout or when
//! clicked.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Upper bound on simultaneously visible toasts; the oldest are dropped.
pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    /// Newest first.
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast and returns its id for the auto-dismiss timer.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.insert(
            0,
            Toast {
                id,
                kind,
                message: message.into(),
            },
        );
        self.items.truncate(MAX_VISIBLE);
        id
    }

    /// Removes a toast; unknown ids (already dismissed) are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_is_first() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastKind::Info, "Saving");
        let second = queue.push(ToastKind::Success, "Saved");
        assert_ne!(first, second);
        let messages: Vec<_> = queue.items().iter().map(|toast| toast.message.as_str()).collect();
        assert_eq!(messages, vec!["Saved", "Saving"]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastKind::Error, "Failed to book hall");
        queue.dismiss(id);
        queue.dismiss(id);
        assert!(queue.items().is_empty());
    }

    #[test]
    fn oldest_toasts_fall_off() {
        let mut queue = ToastQueue::new();
        for index in 0..(MAX_VISIBLE + 2) {
            queue.push(ToastKind::Info, format!("toast {index}"));
        }
        assert_eq!(queue.items().len(), MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, format!("toast {}", MAX_VISIBLE + 1));
    }
}
