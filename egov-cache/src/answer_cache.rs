//! Answer cache with lazy TTL expiry and LRU capacity eviction.
//!
//! Entries live in a `LinkedHashMap` ordered oldest-access-first: `get`
//! refreshes an entry to the back, eviction pops the front. Expiry is
//! lazy — an expired entry is removed the moment a lookup touches it and
//! is never returned, even if eviction has not reached it yet.

use std::time::{Duration, Instant};

use linked_hash_map::LinkedHashMap;
use std::sync::RwLock;
use tracing::debug;

use crate::fingerprint::Fingerprint;

struct CacheEntry {
    answer: String,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

/// Fingerprint-keyed answer cache bounded by TTL and capacity.
pub struct AnswerCache {
    entries: RwLock<LinkedHashMap<Fingerprint, CacheEntry>>,
    ttl: Duration,
    capacity: usize,
}

impl AnswerCache {
    /// Create a cache holding up to `capacity` answers for `ttl` each.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: RwLock::new(LinkedHashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Look up an answer, refreshing its recency on a hit.
    ///
    /// An entry past its TTL counts as a miss and is dropped in place.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<String> {
        let mut entries = self.entries.write().ok()?;

        match entries.get_refresh(fingerprint) {
            None => return None,
            Some(entry) if !entry.is_expired(self.ttl) => {
                return Some(entry.answer.clone());
            }
            Some(_) => {}
        }

        entries.remove(fingerprint);
        debug!(%fingerprint, "cache entry expired");
        None
    }

    /// Store an answer, evicting least-recently-used entries at capacity.
    ///
    /// Re-inserting an existing fingerprint replaces its value; there is
    /// at most one live entry per fingerprint.
    pub fn put(&self, fingerprint: Fingerprint, answer: String) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };

        if entries.contains_key(&fingerprint) {
            entries.remove(&fingerprint);
        }
        while entries.len() >= self.capacity {
            if let Some((evicted, _)) = entries.pop_front() {
                debug!(fingerprint = %evicted, "evicted least-recently-used entry");
            } else {
                break;
            }
        }

        entries.insert(
            fingerprint,
            CacheEntry {
                answer,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of resident entries, expired ones included until touched.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}
