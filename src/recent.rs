//! Per-node highlight expiration tracking.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// How long a recently touched node stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(3);

/// Tracks recently added or toggled node paths with per-entry expiration.
pub struct RecentTracker {
    entries: HashMap<String, Instant>,
}

impl Default for RecentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentTracker {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Record a node path as highlighted at the given instant.
    pub fn insert(&mut self, path: String, now: Instant) {
        self.entries.insert(path, now);
    }

    /// Return the set of node paths whose highlights have not yet expired.
    pub fn active_set(&mut self, now: Instant) -> HashSet<String> {
        self.entries
            .retain(|_, inserted| now.duration_since(*inserted) < HIGHLIGHT_DURATION);
        self.entries.keys().cloned().collect()
    }

    /// Remove all highlights.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
impl RecentTracker {
    /// Whether there are any tracked entries (before expiration pruning).
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
