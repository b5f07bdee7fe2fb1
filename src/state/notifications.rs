//! Notification list state shared by the staff and patient bells.
//!
//! The polling loop replaces the whole list with the latest server
//! snapshot (last-write-wins; each poll is an idempotent read). Mark-as-read
//! is optimistic: the previous snapshot is kept so a failed PATCH can roll
//! the list back instead of leaving the UI claiming items were read.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub open: bool,
}

impl NotificationsState {
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Replace the list with a fresh poll result.
    pub fn replace(&mut self, items: Vec<Notification>) {
        self.items = items;
    }

    /// Optimistically mark everything read, returning the prior snapshot
    /// for rollback if the server-side mark-read call fails.
    pub fn mark_all_read(&mut self) -> Vec<Notification> {
        let snapshot = self.items.clone();
        for n in &mut self.items {
            n.is_read = true;
        }
        snapshot
    }

    /// Restore a snapshot taken by [`Self::mark_all_read`].
    pub fn rollback(&mut self, snapshot: Vec<Notification>) {
        self.items = snapshot;
    }
}
