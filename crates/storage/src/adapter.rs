//! Narrow persistence capability for single-token settings
//!
//! The theme preference store depends only on this interface: get or set
//! one string value under one key. The concrete storage technology stays
//! behind it, which is what lets tests substitute a fault-injecting
//! double without touching the store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use thiserror::Error;
use tokio::sync::Notify;

use crate::kv::KvStore;

/// Persistence adapter error types
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Underlying read or write failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Read/write capability for a single string value per key
#[async_trait]
pub trait PreferenceStorage: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Sled-backed adapter used in production
pub struct SledPreferenceStorage {
    kv: KvStore,
}

impl SledPreferenceStorage {
    /// Create an adapter over an open key-value store
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl PreferenceStorage for SledPreferenceStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.kv
            .get_raw(key)
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.kv
            .set_raw(key, value)
            .map_err(|e| StorageError::Io(e.to_string()))?;
        self.kv
            .flush()
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

/// In-memory adapter with fault injection and a write gate
///
/// Used by tests that need to provoke read/write failures or to control
/// the ordering of overlapping writes. `hold_writes` parks every `set`
/// call until `release_writes` is invoked.
#[derive(Default)]
pub struct MemoryPreferenceStorage {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    hold: AtomicBool,
    gate: Notify,
    write_count: AtomicU64,
}

impl MemoryPreferenceStorage {
    /// Create an empty adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter pre-seeded with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .values
            .lock()
            .unwrap()
            .insert(key.into(), value.into());
        storage
    }

    /// Make all subsequent reads fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make all subsequent writes fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Park incoming writes until [`release_writes`](Self::release_writes)
    pub fn hold_writes(&self) {
        self.hold.store(true, Ordering::SeqCst);
    }

    /// Release writes parked by [`hold_writes`](Self::hold_writes)
    pub fn release_writes(&self) {
        self.hold.store(false, Ordering::SeqCst);
        self.gate.notify_waiters();
    }

    /// Inspect the stored value without going through the async interface
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Number of completed (non-failed) writes
    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::SeqCst)
    }

    async fn wait_for_gate(&self) {
        loop {
            let notified = self.gate.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if !self.hold.load(Ordering::SeqCst) {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl PreferenceStorage for MemoryPreferenceStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Io("injected read failure".to_string()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.wait_for_gate().await;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io("injected write failure".to_string()));
        }

        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sled_adapter_round_trip() {
        let kv = KvStore::in_memory().unwrap();
        let storage = SledPreferenceStorage::new(kv);

        assert_eq!(storage.get("app_theme").await.unwrap(), None);

        storage.set("app_theme", "dark").await.unwrap();
        assert_eq!(
            storage.get("app_theme").await.unwrap(),
            Some("dark".to_string())
        );
    }

    #[tokio::test]
    async fn test_memory_adapter_round_trip() {
        let storage = MemoryPreferenceStorage::new();

        storage.set("app_theme", "light").await.unwrap();
        assert_eq!(
            storage.get("app_theme").await.unwrap(),
            Some("light".to_string())
        );
        assert_eq!(storage.write_count(), 1);
    }

    #[tokio::test]
    async fn test_memory_adapter_seeded_value() {
        let storage = MemoryPreferenceStorage::with_value("app_theme", "dark");
        assert_eq!(
            storage.get("app_theme").await.unwrap(),
            Some("dark".to_string())
        );
    }

    #[tokio::test]
    async fn test_read_fault_injection() {
        let storage = MemoryPreferenceStorage::with_value("app_theme", "dark");
        storage.set_fail_reads(true);

        assert!(storage.get("app_theme").await.is_err());

        storage.set_fail_reads(false);
        assert!(storage.get("app_theme").await.is_ok());
    }

    #[tokio::test]
    async fn test_write_fault_injection_leaves_value_untouched() {
        let storage = MemoryPreferenceStorage::with_value("app_theme", "light");
        storage.set_fail_writes(true);

        assert!(storage.set("app_theme", "dark").await.is_err());
        assert_eq!(storage.snapshot("app_theme"), Some("light".to_string()));
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn test_write_gate_parks_and_releases() {
        let storage = Arc::new(MemoryPreferenceStorage::new());
        storage.hold_writes();

        let writer = {
            let storage = Arc::clone(&storage);
            tokio::spawn(async move { storage.set("app_theme", "dark").await })
        };

        tokio::task::yield_now().await;
        assert_eq!(storage.snapshot("app_theme"), None);

        storage.release_writes();
        writer.await.unwrap().unwrap();
        assert_eq!(storage.snapshot("app_theme"), Some("dark".to_string()));
    }
}
