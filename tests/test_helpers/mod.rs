//! Environment guards shared by integration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Restores the touched variables when dropped.
///
/// Holding the guard serializes every test that mutates the process
/// environment.
pub struct EnvVarGuard {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies `changes`; `None` removes the variable.
    pub fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let saved = changes
            .iter()
            .map(|(key, value)| {
                let previous = env::var(key).ok();
                write_var(key, *value);
                ((*key).to_owned(), previous)
            })
            .collect();
        Self { saved, _lock: lock }
    }

    /// Removes every listed variable.
    pub fn cleared(keys: &[&str]) -> Self {
        let changes: Vec<_> = keys.iter().map(|key| (*key, None)).collect();
        Self::apply(&changes)
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            write_var(&key, value.as_deref());
        }
    }
}

fn write_var(key: &str, value: Option<&str>) {
    unsafe {
        // SAFETY: ENV_LOCK is held by the caller for every mutation.
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}
