//! Scoped environment variable overrides
//!
//! The process environment is global, so a test that sets a variable
//! must both restore the old value afterwards and keep other tests
//! from touching the environment at the same time. [`EnvGuard`] does
//! both: it records the original value of every variable it changes
//! and restores them on drop, and all guards serialize through one
//! process-wide lock.
//!
//! # Example
//!
//! ```
//! use browser_harness::env::EnvGuard;
//!
//! {
//!     let mut guard = EnvGuard::acquire();
//!     guard.set("API_KEY", "test_key");
//!     assert_eq!(std::env::var("API_KEY").unwrap(), "test_key");
//!
//!     guard.remove("API_KEY");
//!     assert!(std::env::var("API_KEY").is_err());
//! } // original state restored here
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the environment lock and undoes every change on drop
pub struct EnvGuard {
    saved: HashMap<String, Option<String>>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Take the environment lock
    ///
    /// Blocks while another guard is alive, so tests that touch the
    /// environment cannot interleave.
    pub fn acquire() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        Self {
            saved: HashMap::new(),
            _lock: lock,
        }
    }

    /// Set a variable, remembering its original value
    pub fn set(&mut self, key: &str, value: &str) {
        self.save_original(key);
        std::env::set_var(key, value);
    }

    /// Remove a variable, remembering its original value
    pub fn remove(&mut self, key: &str) {
        self.save_original(key);
        std::env::remove_var(key);
    }

    fn save_original(&mut self, key: &str) {
        // Only the first change per key records the original; later
        // changes must not overwrite it.
        self.saved
            .entry(key.to_string())
            .or_insert_with(|| std::env::var(key).ok());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain() {
            match original {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}
