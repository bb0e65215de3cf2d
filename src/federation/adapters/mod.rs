//! Registry adapter implementations.

mod disabled;
mod local;
pub mod memory;
mod remote;

pub use disabled::DisabledAdapter;
pub use local::LocalAdapter;
pub use remote::{DEFAULT_REMOTE_TIMEOUT, RemoteAdapter};

use crate::federation::domain::{RegistryDescriptor, RegistryStatus};
use chrono::{DateTime, Utc};
use std::sync::{PoisonError, RwLock};

/// Reads a descriptor snapshot, tolerating a poisoned lock.
fn snapshot(descriptor: &RwLock<RegistryDescriptor>) -> RegistryDescriptor {
    descriptor
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Applies a health-check outcome and returns the updated descriptor.
fn record_health(
    descriptor: &RwLock<RegistryDescriptor>,
    status: RegistryStatus,
    checked_at: DateTime<Utc>,
) -> RegistryDescriptor {
    let mut guard = descriptor.write().unwrap_or_else(PoisonError::into_inner);
    guard.record_check(status, checked_at);
    guard.clone()
}
