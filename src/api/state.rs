//! Application state for the leave API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::LeavePolicy;
use crate::roster::Roster;

/// Shared application state.
///
/// Reads take the roster's read lock; only usage registration takes the
/// write lock.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<LeavePolicy>,
    roster: Arc<RwLock<Roster>>,
}

impl AppState {
    /// Creates the state from a policy and a loaded roster.
    pub fn new(policy: LeavePolicy, roster: Roster) -> Self {
        Self {
            policy: Arc::new(policy),
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    /// Returns the leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the shared roster.
    pub fn roster(&self) -> &RwLock<Roster> {
        &self.roster
    }
}
