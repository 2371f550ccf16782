//! Per-phone-number mutual exclusion

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of async locks keyed by phone number
///
/// Operations on the same number run one at a time; different numbers never
/// contend. An entry lives exactly as long as someone is holding or waiting
/// for it, including waiters whose future is dropped before they get the lock.
#[derive(Debug, Default)]
pub(crate) struct KeyLocks {
    locks: Mutex<HashMap<String, LockEntry>>,
}

#[derive(Debug)]
struct LockEntry {
    mutex: Arc<AsyncMutex<()>>,
    /// Acquirers currently holding or waiting on this key
    users: usize,
}

/// Counts one acquirer against a key until dropped
struct Registration<'a> {
    registry: &'a KeyLocks,
    key: String,
}

/// Held while a single phone number's entry is being read or mutated
pub(crate) struct KeyGuard<'a> {
    // Declaration order is drop order: unlock first, then deregister
    _guard: OwnedMutexGuard<()>,
    _registration: Registration<'a>,
}

impl KeyLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `key`
    ///
    /// Dropping the returned future before it resolves releases the
    /// registration, so cancelled callers never leave entries behind.
    pub(crate) async fn acquire(&self, key: &str) -> KeyGuard<'_> {
        let (mutex, registration) = {
            let mut locks = self.entries();
            let entry = locks.entry(key.to_string()).or_insert_with(|| LockEntry {
                mutex: Arc::new(AsyncMutex::new(())),
                users: 0,
            });
            entry.users += 1;

            (
                Arc::clone(&entry.mutex),
                Registration {
                    registry: self,
                    key: key.to_string(),
                },
            )
        };

        let guard = mutex.lock_owned().await;

        KeyGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    /// Number of keys with a live lock entry
    pub(crate) fn len(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, LockEntry>> {
        self.locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        let mut locks = self.registry.entries();

        if let Some(entry) = locks.get_mut(&self.key) {
            entry.users = entry.users.saturating_sub(1);
            if entry.users == 0 {
                locks.remove(&self.key);
            }
        }
    }
}
