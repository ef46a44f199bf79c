//! # Capture Name Cache

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    names::CaptureName,
    types::{GrokHashMap, hash_map_with_capacity},
};

/// Identity of a raw name's storage.
fn storage_id(raw: &Arc<str>) -> usize {
    Arc::as_ptr(raw) as *const u8 as usize
}

/// Interior-Mutable Capture Name Cache
///
/// Interns decoded [`CaptureName`]s, keyed by the address of the raw name
/// storage they were decoded from.
///
/// Identity keys are only sound for storage which outlives the cache, and is
/// never mutated; so each [`CompiledMatcher`](crate::CompiledMatcher) owns
/// exactly one cache, covering only its own group names. Per-match text is
/// never cached.
///
/// Reads share the lock; on a miss, concurrent writers race to insert the
/// same decoded value, and the first one wins.
#[derive(Debug, Default)]
pub struct NameCache {
    entries: RwLock<GrokHashMap<usize, CaptureName>>,
}

impl NameCache {
    /// Create a cache sized for `capacity` names.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(hash_map_with_capacity(capacity)),
        }
    }

    /// The number of decoded names held.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode a matcher-owned raw name, through the cache.
    ///
    /// `raw` must be storage owned by the same matcher as this cache.
    pub(crate) fn decode(
        &self,
        raw: &Arc<str>,
    ) -> CaptureName {
        let id = storage_id(raw);

        if let Some(name) = self.entries.read().get(&id) {
            return name.clone();
        }

        let name = CaptureName::decode(raw);
        log::trace!("caching capture name {raw:?} as {:?}", name.key());

        self.entries.write().entry(id).or_insert(name).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::CaptureKind;

    #[test]
    fn test_decode_is_idempotent() {
        let cache = NameCache::default();
        let raw: Arc<str> = "DAY:day".into();

        let first = cache.decode(&raw);
        assert_eq!(cache.len(), 1);

        let second = cache.decode(&raw);
        assert_eq!(cache.len(), 1);

        assert_eq!(first, second);
        assert_eq!(first, CaptureName::decode(&raw));
        assert!(Arc::ptr_eq(first.key_arc(), second.key_arc()));
    }

    #[test]
    fn test_distinct_storage() {
        let cache = NameCache::with_capacity(2);
        let a: Arc<str> = ":word".into();
        let b: Arc<str> = ":word".into();

        assert_eq!(cache.decode(&a).kind(), CaptureKind::RawNamed);
        assert_eq!(cache.decode(&b).kind(), CaptureKind::RawNamed);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_concurrent_fill() {
        let cache = NameCache::default();
        let names: Vec<Arc<str>> = (0..32)
            .map(|idx| Arc::from(format!("M{idx}:alias{idx}")))
            .collect();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for (idx, raw) in names.iter().enumerate() {
                        assert_eq!(cache.decode(raw).key(), format!("alias{idx}"));
                    }
                });
            }
        });

        assert_eq!(cache.len(), names.len());
    }
}
