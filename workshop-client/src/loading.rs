//! Per-action busy flags.

use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;

/// A client action, one per API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Health,
    Add,
    Style,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Health => "health",
            Action::Add => "add",
            Action::Style => "style",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Busy flag keyed by action. Cloning shares the same flags.
#[derive(Debug, Clone, Default)]
pub struct LoadingState {
    flags: Arc<DashMap<Action, bool>>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self, action: Action) -> bool {
        self.flags.get(&action).is_some_and(|busy| *busy)
    }

    /// Mark `action` busy. Returns `None` if it already is; the returned
    /// guard clears the flag when dropped.
    pub fn begin(&self, action: Action) -> Option<BusyGuard> {
        let mut busy = self.flags.entry(action).or_insert(false);
        if *busy {
            return None;
        }
        *busy = true;

        Some(BusyGuard {
            flags: Arc::clone(&self.flags),
            action,
        })
    }
}

/// Clears its action's busy flag on drop, whatever way the request ended.
#[derive(Debug)]
pub struct BusyGuard {
    flags: Arc<DashMap<Action, bool>>,
    action: Action,
}

impl BusyGuard {
    pub fn action(&self) -> Action {
        self.action
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flags.insert(self.action, false);
    }
}
