//! In-memory stores owned by the server process.
//!
//! Each store keeps its records behind a single `Mutex` and is shared with the
//! HTTP workers through `web::Data`. Every public operation takes the lock once
//! and completes its whole check-and-mutate sequence before releasing it.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;

/// Hands out decimal string ids that are never reused, even after deletions.
#[derive(Debug)]
pub(crate) struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Starts after the highest existing numeric id, or after `existing.len()`
    /// when that is larger, so a store without deletions hands out `len + 1`.
    pub(crate) fn after<'a>(existing: impl ExactSizeIterator<Item = &'a str>) -> Self {
        let count = existing.len() as u64;
        let highest = existing
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next: highest.max(count).saturating_add(1),
        }
    }

    pub(crate) fn next_id(&mut self) -> String {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id.to_string()
    }
}
