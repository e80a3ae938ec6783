//! Presence registry: who has been active within the timeout window.
//!
//! Expiry is lazy. Nothing runs in the background; every read that returns
//! more than a single user first sweeps out records older than the timeout,
//! so a stale record lingers until the next such read.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};

use tradedesk_core::config::PresenceConfig;
use tradedesk_core::traits::Clock;

use crate::record::{OnlineAdmin, SessionMetadata, SessionRecord};
use crate::roles::RoleSet;

/// A record plus the position it was first inserted at.
#[derive(Debug)]
struct Entry {
    seq: u64,
    record: SessionRecord,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    next_seq: u64,
}

impl Inner {
    /// Drop every record older than `timeout`. Returns how many went.
    fn sweep(&mut self, now: DateTime<Utc>, timeout: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !is_expired(entry.record.last_active, now, timeout));
        before - self.entries.len()
    }
}

/// Stale strictly after `timeout`; a record exactly `timeout` old is live.
fn is_expired(last_active: DateTime<Utc>, now: DateTime<Utc>, timeout: Duration) -> bool {
    now - last_active > timeout
}

/// In-memory registry of recently active users, keyed by user id.
///
/// All access, including the expiry sweep performed by reads, goes through
/// one mutex, so concurrent writes to the same user resolve in completion
/// order and a sweep can never interleave with an update.
#[derive(Debug)]
pub struct PresenceRegistry {
    inner: Mutex<Inner>,
    timeout: Duration,
    privileged_roles: RoleSet,
    clock: Arc<dyn Clock>,
}

impl PresenceRegistry {
    /// Create an empty registry.
    pub fn new(config: &PresenceConfig, clock: Arc<dyn Clock>) -> Self {
        let timeout_ms = i64::try_from(config.timeout_ms).unwrap_or(i64::MAX);
        Self {
            inner: Mutex::new(Inner::default()),
            timeout: Duration::try_milliseconds(timeout_ms).unwrap_or(Duration::MAX),
            privileged_roles: config.privileged_roles.iter().cloned().collect(),
            clock,
        }
    }

    /// Inactivity window after which a record expires.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Roles returned by [`PresenceRegistry::get_online_admins`].
    pub fn privileged_roles(&self) -> &RoleSet {
        &self.privileged_roles
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every critical section leaves the map consistent, so a panic
        // elsewhere while holding the lock does not invalidate it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn swept(&self) -> MutexGuard<'_, Inner> {
        let mut inner = self.lock();
        let removed = inner.sweep(self.clock.now(), self.timeout);
        if removed > 0 {
            tracing::debug!(removed, remaining = inner.entries.len(), "Expired presence records");
        }
        inner
    }

    /// Insert or overwrite the record for `user_id`, stamping it with the
    /// current time. Returns the stored record.
    pub fn update(&self, user_id: &str, metadata: SessionMetadata) -> SessionRecord {
        let mut inner = self.lock();
        let record = SessionRecord::stamp(metadata, self.clock.now());

        if let Some(entry) = inner.entries.get_mut(user_id) {
            entry.record = record.clone();
        } else {
            let seq = inner.next_seq;
            inner.next_seq += 1;
            inner.entries.insert(
                user_id.to_string(),
                Entry {
                    seq,
                    record: record.clone(),
                },
            );
        }

        tracing::trace!(user_id, role = %record.role, "Presence updated");
        record
    }

    /// Forget `user_id`. Absent users are ignored. Returns whether a record
    /// was present.
    pub fn remove(&self, user_id: &str) -> bool {
        let removed = self.lock().entries.remove(user_id).is_some();
        if removed {
            tracing::debug!(user_id, "Presence removed");
        }
        removed
    }

    /// Sweep, then return an owned snapshot of every live record.
    pub fn get_all(&self) -> HashMap<String, SessionRecord> {
        let inner = self.swept();
        inner
            .entries
            .iter()
            .map(|(id, entry)| (id.clone(), entry.record.clone()))
            .collect()
    }

    /// Whether `user_id` has a record no older than the timeout.
    ///
    /// Checks only that record and does not sweep.
    pub fn is_online(&self, user_id: &str) -> bool {
        let inner = self.lock();
        let now = self.clock.now();
        inner
            .entries
            .get(user_id)
            .is_some_and(|entry| !is_expired(entry.record.last_active, now, self.timeout))
    }

    /// Sweep, then list live records whose role is privileged, in the order
    /// their users were first inserted.
    pub fn get_online_admins(&self) -> Vec<OnlineAdmin> {
        self.get_online_with_roles(&self.privileged_roles)
    }

    /// Like [`PresenceRegistry::get_online_admins`] with a caller-chosen
    /// role set.
    pub fn get_online_with_roles(&self, roles: &RoleSet) -> Vec<OnlineAdmin> {
        let inner = self.swept();

        let mut matched: Vec<(u64, OnlineAdmin)> = inner
            .entries
            .iter()
            .filter(|(_, entry)| roles.contains(&entry.record.role))
            .map(|(id, entry)| (entry.seq, OnlineAdmin::from_record(id, &entry.record)))
            .collect();
        matched.sort_by_key(|(seq, _)| *seq);

        matched.into_iter().map(|(_, admin)| admin).collect()
    }

    /// Sweep, then count live records.
    pub fn online_count(&self) -> usize {
        let inner = self.swept();
        inner.entries.len()
    }
}
