//! Reading cache
//!
//! A small TTL cache in front of the live temperature source. Entries are
//! whole readings written atomically, keyed by the coordinate pair (not the
//! scenario or nutritional index, which are applied downstream). Expired
//! entries are purged on insert.

use crate::temperature::TemperatureReading;
use crate::types::Coordinate;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Quantization factor for cache keys: 1e-4 degrees, finer than any SST
/// grid the engine queries.
const KEY_SCALE: f64 = 10_000.0;

/// Cache key: coordinate quantized to 1e-4°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    lat: i64,
    lon: i64,
}

impl From<Coordinate> for CacheKey {
    fn from(coord: Coordinate) -> Self {
        Self {
            lat: (coord.latitude() * KEY_SCALE).round() as i64,
            lon: (coord.longitude() * KEY_SCALE).round() as i64,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedEntry {
    reading: TemperatureReading,
    stored_at: DateTime<Utc>,
}

/// Time-windowed memoization of resolved readings.
#[derive(Debug)]
pub struct ReadingCache {
    ttl: Duration,
    entries: HashMap<CacheKey, CachedEntry>,
}

impl ReadingCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Look up a reading stored within the TTL window.
    pub fn get(&self, coord: Coordinate, now: DateTime<Utc>) -> Option<&TemperatureReading> {
        self.entries
            .get(&CacheKey::from(coord))
            .filter(|entry| now - entry.stored_at < self.ttl)
            .map(|entry| &entry.reading)
    }

    /// Store a reading, replacing any previous entry for the coordinate and
    /// dropping every entry whose window has passed.
    pub fn insert(&mut self, coord: Coordinate, reading: TemperatureReading, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now - entry.stored_at < ttl);
        self.entries
            .insert(CacheKey::from(coord), CachedEntry { reading, stored_at: now });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
