//! Time-boxed response cache for page fetchers.
//!
//! An entry is served until it is older than the revalidation window, after
//! which the next lookup misses and the caller refetches and replaces it.
//! A zero window disables caching entirely.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

#[derive(Debug)]
struct Entry<T> {
    stored_at: Instant,
    value: T,
}

#[derive(Debug)]
pub struct RevalidationCache<T> {
    window: Duration,
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> RevalidationCache<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a clone of the cached value if it is still inside the window.
    pub async fn get(&self, key: &str) -> Option<T> {
        self.get_at(key, Instant::now()).await
    }

    async fn get_at(&self, key: &str, now: Instant) -> Option<T> {
        if self.window.is_zero() {
            return None;
        }
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if now.saturating_duration_since(entry.stored_at) < self.window => {
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores `value` under `key`, dropping every entry that has already
    /// expired so keys that are never read again do not accumulate.
    pub async fn insert(&self, key: impl Into<String>, value: T) {
        self.insert_at(key.into(), value, Instant::now()).await;
    }

    async fn insert_at(&self, key: String, value: T, now: Instant) {
        if self.window.is_zero() {
            return;
        }
        let mut entries = self.entries.lock().await;
        entries.retain(|_, entry| now.saturating_duration_since(entry.stored_at) < self.window);
        entries.insert(
            key,
            Entry {
                stored_at: now,
                value,
            },
        );
    }
}
