//! Calculation history, owned by the CLI.
//!
//! The core engine only supplies the expression string and the numeric
//! result; bounding and ordering the list is this caller's policy.

use std::collections::VecDeque;

/// Maximum number of calculations retained; the oldest is evicted.
pub const MAX_ITEMS: usize = 20;

/// One completed calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub expression: String,
    pub result: f64,
    pub timestamp: String,
}

/// Bounded, newest-first calculation history.
#[derive(Debug, Default)]
pub struct History {
    items: VecDeque<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an item, evicting the oldest once the bound is reached.
    pub fn record(&mut self, item: HistoryItem) {
        self.items.push_front(item);
        self.items.truncate(MAX_ITEMS);
    }

    /// Items from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
