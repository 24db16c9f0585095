//! UI-only models shared between the store and the toast host.

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
}

/// Ordered set of visible toasts plus the id allocator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    /// Toasts currently displayed, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_dismissal_is_idempotent() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one");
        let second = queue.push("two");
        assert!(second > first);
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "two");
    }
}
