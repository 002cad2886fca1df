//! Notification deduplication
//!
//! The backend returns its full notification log on every poll, so novelty is
//! decided here by identity (the notification timestamp), never by position
//! in the snapshot.

use crate::types::Notification;
use std::collections::{HashSet, VecDeque};

/// Tracks which notification identities have already been toasted
#[derive(Debug, Clone, Default)]
pub struct NotificationDeduplicator {
    shown: HashSet<String>,
    /// Insertion order, used for oldest-first eviction
    order: VecDeque<String>,
    max_tracked: Option<usize>,
}

impl NotificationDeduplicator {
    /// Create a deduplicator that remembers every identity for the session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deduplicator that forgets the oldest identities beyond `max`
    ///
    /// An identity evicted this way is treated as new if the backend still
    /// reports it, so `max` should exceed the backend's log length.
    pub fn with_max_tracked(max: Option<usize>) -> Self {
        Self {
            max_tracked: max.map(|m| m.max(1)),
            ..Self::default()
        }
    }

    /// Return the notifications not shown before, marking each as shown
    ///
    /// Snapshot order is preserved; an identity repeated within one snapshot
    /// is returned once.
    pub fn filter_new(&mut self, notifications: &[Notification]) -> Vec<Notification> {
        let mut fresh = Vec::new();

        for notification in notifications {
            let identity = notification.identity();
            if self.shown.contains(identity) {
                continue;
            }

            self.shown.insert(identity.to_string());
            self.order.push_back(identity.to_string());
            fresh.push(notification.clone());
        }

        self.evict_oldest();

        if !fresh.is_empty() {
            tracing::debug!(
                "{} new notification(s), {} tracked",
                fresh.len(),
                self.shown.len()
            );
        }

        fresh
    }

    fn evict_oldest(&mut self) {
        let Some(max) = self.max_tracked else {
            return;
        };
        while self.order.len() > max {
            if let Some(old) = self.order.pop_front() {
                self.shown.remove(&old);
            }
        }
    }

    /// Whether an identity has already been shown
    pub fn contains(&self, identity: &str) -> bool {
        self.shown.contains(identity)
    }

    /// Number of remembered identities
    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}
